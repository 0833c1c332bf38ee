use crate::{
    AuthEvent, AuthService, CredentialStore, CustomerService, HttpClient, ItemService,
    PaymentService, ReportService, SalesService, SubscriptionService, UserService,
};

use std::sync::Arc;

use tokio::sync::broadcast;

/// Every service of the billing API over one shared transport
#[derive(Clone)]
pub struct Api {
    http: Arc<HttpClient>,
}

impl Api {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http: Arc::new(http),
        }
    }

    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http
    }

    pub fn credentials(&self) -> &CredentialStore {
        self.http.credentials()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.http.subscribe()
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(Arc::clone(&self.http))
    }

    pub fn customers(&self) -> CustomerService {
        CustomerService::new(Arc::clone(&self.http))
    }

    pub fn subscriptions(&self) -> SubscriptionService {
        SubscriptionService::new(Arc::clone(&self.http))
    }

    pub fn sales(&self) -> SalesService {
        SalesService::new(Arc::clone(&self.http))
    }

    pub fn reports(&self) -> ReportService {
        ReportService::new(Arc::clone(&self.http))
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(Arc::clone(&self.http))
    }

    pub fn items(&self) -> ItemService {
        ItemService::new(Arc::clone(&self.http))
    }

    pub fn users(&self) -> UserService {
        UserService::new(Arc::clone(&self.http))
    }
}
