//! Composition root: one `App` per invocation, built from the loaded config.

use crate::{
    cli::Cli,
    commands::Commands,
    customer_commands::CustomerCommands,
    error::{CliError, Result as CliResult},
    output,
    report_commands::ReportCommands,
    sales_commands::{SalesCommands, SalesFilterArgs},
    subscription_commands::SubscriptionCommands,
};

use bb_api::{Api, CredentialStore, HttpClient};
use bb_config::Config;
use bb_core::{BusinessType, CustomerFilters, SalesFilters, SubscriptionFilters};
use bb_dashboard::{
    CustomersPage, DashboardView, GuardDecision, ListQuery, LoginForm, LoginView, PasswordForm,
    ReportsView, Route, Router, SalesPage, SessionStore, SettingsView, SubscriptionsPage,
};

use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::{Value, json};
use tokio::task::JoinHandle;

pub struct App {
    config: Config,
    api: Api,
    session: Arc<SessionStore>,
    router: Arc<Router>,
    auth_tasks: Vec<JoinHandle<()>>,
}

impl App {
    /// Wire transport, session and router, then restore the persisted session
    pub fn bootstrap(config: Config) -> CliResult<Self> {
        let credentials = CredentialStore::file(config.session_path()?);
        let http = HttpClient::from_config(&config.api, credentials)?;
        let api = Api::new(http);

        let session = Arc::new(SessionStore::from_api(&api));
        let router = Arc::new(Router::new(Arc::clone(&session)));

        let auth_tasks = vec![
            session.watch_auth_events(api.subscribe()),
            router.spawn_auth_redirects(api.subscribe()),
        ];

        let state = session.initialize();
        debug!("Session restored: authenticated={}", state.is_authenticated());

        Ok(Self {
            config,
            api,
            session,
            router,
            auth_tasks,
        })
    }

    /// Ask the router for the screen a command belongs to
    pub fn enter(&self, route: Route) -> CliResult<()> {
        match self.router.navigate(route) {
            GuardDecision::Render(_) => Ok(()),
            GuardDecision::Redirect(target) => Err(CliError::Redirect { route, target }),
            GuardDecision::Wait => Err(CliError::SessionLoading),
        }
    }

    pub async fn run(&self, cli: Cli) -> CliResult<Value> {
        let csv = cli.csv.as_deref();

        match cli.command {
            Commands::Login { email, password } => self.login(email, password).await,
            Commands::Logout => {
                self.session.logout().await;
                Ok(json!({ "authenticated": false }))
            }
            Commands::Whoami => Ok(output::session_json(&self.session.snapshot())),
            Commands::ChangePassword {
                old_password,
                new_password,
                confirm_password,
            } => {
                self.enter(Route::Settings)?;
                let form = PasswordForm::new(old_password, new_password, confirm_password);
                let message = SettingsView::for_api(&self.api)
                    .change_password(form)
                    .await?;
                Ok(json!({ "message": message }))
            }
            Commands::Customers { action } => {
                self.enter(Route::Customers)?;
                self.customers(action, csv).await
            }
            Commands::Subscriptions { action } => {
                self.enter(Route::Subscriptions)?;
                self.subscriptions(action, csv).await
            }
            Commands::Sales { action } => {
                self.enter(Route::Sales)?;
                self.sales(action, csv).await
            }
            Commands::Reports { action } => {
                self.enter(Route::Reports)?;
                self.reports(action).await
            }
            Commands::Dashboard { watch } => {
                self.enter(Route::Dashboard)?;
                self.dashboard(watch, cli.pretty).await
            }
        }
    }

    async fn login(&self, email: String, password: String) -> CliResult<Value> {
        let view = LoginView::new(Arc::clone(&self.session), Arc::clone(&self.router));

        match view.submit(LoginForm::new(email, password)).await? {
            GuardDecision::Redirect(target) => Err(CliError::Redirect {
                route: Route::Dashboard,
                target,
            }),
            _ => {
                let user = self.session.current_user();
                Ok(json!({
                    "user": user.as_ref().map(output::user_json),
                    "route": self.router.current().path(),
                }))
            }
        }
    }

    async fn customers(&self, action: CustomerCommands, csv: Option<&Path>) -> CliResult<Value> {
        match action {
            CustomerCommands::List {
                page,
                page_size,
                status,
                business_type,
                plan,
                city,
                taluka,
                search,
            } => {
                let business_type = business_type
                    .map(|value| value.parse::<BusinessType>())
                    .transpose()?;

                let list = CustomersPage::for_api(&self.api, &self.config.dashboard);
                let mut query = ListQuery::new(self.config.dashboard.default_page_size);
                query.page = page - 1;
                query.page_size = page_size.unwrap_or(query.page_size);
                query.filters = CustomerFilters {
                    city,
                    taluka,
                    plan,
                    status,
                    business_type: business_type.map(|t| t.as_str().to_string()),
                    search,
                };

                list.set_query(query.clone()).await;
                export_loaded(csv, |dir| list.export_csv(dir))?;
                output::page_json(list.snapshot(), page, query.page_size)
            }
            CustomerCommands::Get { id } => {
                let customer = self.api.customers().get(&id).await?;
                Ok(serde_json::to_value(customer)?)
            }
            CustomerCommands::Cities => {
                let cities = self.api.customers().cities().await;
                Ok(json!(cities.into_inner()))
            }
            CustomerCommands::Talukas => {
                let talukas = self.api.customers().talukas().await;
                Ok(json!(talukas.into_inner()))
            }
            CustomerCommands::Export { out, status } => {
                let filters = CustomerFilters {
                    status,
                    ..CustomerFilters::default()
                };
                let bytes = self.api.customers().export(&filters).await?;
                write_export(&out, &bytes)
            }
        }
    }

    async fn subscriptions(
        &self,
        action: SubscriptionCommands,
        csv: Option<&Path>,
    ) -> CliResult<Value> {
        match action {
            SubscriptionCommands::List {
                page,
                page_size,
                status,
                search,
            } => {
                let list = SubscriptionsPage::for_api(&self.api, &self.config.dashboard);
                let mut query = ListQuery::new(self.config.dashboard.default_page_size);
                query.page = page - 1;
                query.page_size = page_size.unwrap_or(query.page_size);
                query.filters = SubscriptionFilters { status, search };

                list.set_query(query.clone()).await;
                export_loaded(csv, |dir| list.export_csv(dir))?;
                output::page_json(list.snapshot(), page, query.page_size)
            }
            SubscriptionCommands::Get { id } => {
                let subscription = self.api.subscriptions().get(&id).await?;
                Ok(serde_json::to_value(subscription)?)
            }
            SubscriptionCommands::Plans => {
                let plans = self.api.subscriptions().plans().await;
                Ok(serde_json::to_value(plans.into_inner())?)
            }
            SubscriptionCommands::Export { out, status } => {
                let filters = SubscriptionFilters {
                    status,
                    ..SubscriptionFilters::default()
                };
                let bytes = self.api.subscriptions().export(&filters).await?;
                write_export(&out, &bytes)
            }
        }
    }

    async fn sales(&self, action: SalesCommands, csv: Option<&Path>) -> CliResult<Value> {
        match action {
            SalesCommands::Performance { filters } => {
                let page = SalesPage::for_api(&self.api);
                let filters = sales_filters(filters);
                page.update_filters(|current| *current = filters).await;

                export_loaded(csv, |dir| page.export_csv(dir))?;
                output::sales_json(page.snapshot(), &page.totals())
            }
            SalesCommands::Export { out, filters } => {
                let bytes = self.api.sales().export(&sales_filters(filters)).await?;
                write_export(&out, &bytes)
            }
        }
    }

    async fn reports(&self, action: ReportCommands) -> CliResult<Value> {
        let reports = self.api.reports();

        match action {
            ReportCommands::Summary => {
                let view = ReportsView::for_api(&self.api);
                view.refresh().await;
                match output::settled(view.snapshot())? {
                    Some(data) => output::reports_json(&data),
                    None => Ok(Value::Null),
                }
            }
            ReportCommands::Dashboard => Ok(serde_json::to_value(reports.dashboard_kpis().await?)?),
            ReportCommands::Revenue => Ok(serde_json::to_value(reports.revenue().await?)?),
            ReportCommands::Plans => Ok(serde_json::to_value(reports.plan_distribution().await?)?),
            ReportCommands::Growth { days } => {
                Ok(serde_json::to_value(reports.customer_growth(days).await?)?)
            }
            ReportCommands::Trend { months } => {
                let trend = reports.revenue_trend(months).await;
                if trend.is_degraded() {
                    warn!("Revenue trend unavailable, showing no data");
                }
                Ok(serde_json::to_value(trend.into_inner())?)
            }
        }
    }

    /// One load, or a refresh loop that prints every settled state until Ctrl-C
    async fn dashboard(&self, watch: bool, pretty: bool) -> CliResult<Value> {
        let view = Arc::new(DashboardView::for_api(&self.api));
        view.refresh().await;

        let mut last = self.dashboard_snapshot(&view)?;
        if !watch {
            return Ok(last);
        }

        output::print(&last, pretty)?;
        let refresh = view.start_auto_refresh(self.config.dashboard.refresh_interval());
        let mut states = view.subscribe();
        states.mark_unchanged();

        info!(
            "Refreshing every {}s, Ctrl-C to stop",
            refresh.period().as_secs()
        );

        loop {
            tokio::select! {
                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    if states.borrow_and_update().is_loading() {
                        continue;
                    }
                    if self.router.current() == Route::Login {
                        return Err(CliError::Redirect {
                            route: Route::Dashboard,
                            target: Route::Login,
                        });
                    }

                    match self.dashboard_snapshot(&view) {
                        Ok(value) => {
                            output::print(&value, pretty)?;
                            last = value;
                        }
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Stopping dashboard refresh");
                    break;
                }
            }
        }

        refresh.stop();
        Ok(last)
    }

    fn dashboard_snapshot(&self, view: &DashboardView) -> CliResult<Value> {
        match output::settled(view.snapshot())? {
            Some(data) => output::dashboard_json(&data),
            None => Ok(json!({ "kpis": view.kpis() })),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for task in &self.auth_tasks {
            task.abort();
        }
    }
}

fn sales_filters(args: SalesFilterArgs) -> SalesFilters {
    SalesFilters {
        start_date: args.start_date,
        end_date: args.end_date,
        city: args.city,
        district: args.district,
    }
}

/// Client-side CSV of the loaded rows when `--csv` was given
fn export_loaded<F>(dir: Option<&Path>, export: F) -> CliResult<()>
where
    F: FnOnce(&Path) -> bb_core::CoreResult<Option<std::path::PathBuf>>,
{
    let Some(dir) = dir else {
        return Ok(());
    };

    match export(dir)? {
        Some(path) => info!("Exported loaded rows to {}", path.display()),
        None => warn!("Nothing loaded, no CSV written"),
    }
    Ok(())
}

fn write_export(out: &Path, bytes: &[u8]) -> CliResult<Value> {
    std::fs::write(out, bytes).map_err(|source| CliError::Io {
        path: out.to_path_buf(),
        source,
    })?;

    Ok(json!({
        "file": out.display().to_string(),
        "bytes": bytes.len(),
    }))
}
