use crate::CsvRecord;
use crate::format::format_date;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: String,
    pub shop_name: String,
    pub owner_name: String,
    pub mobile_number: String,
    pub business_type: String,
    pub city: String,
    pub taluka: String,
    pub plan_name: String,
    pub plan_start_date: String,
    pub plan_end_date: String,
    pub status: String,
    pub hardware_type: String,
    pub salesperson_name: String,
}

impl CsvRecord for Customer {
    fn headers() -> &'static [&'static str] {
        &[
            "Customer ID",
            "Shop Name",
            "Owner Name",
            "Mobile Number",
            "Business Type",
            "City",
            "Taluka",
            "Plan Name",
            "Plan Start Date",
            "Plan End Date",
            "Status",
            "Hardware",
            "Salesperson",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.shop_name.clone(),
            self.owner_name.clone(),
            self.mobile_number.clone(),
            self.business_type.clone(),
            self.city.clone(),
            self.taluka.clone(),
            self.plan_name.clone(),
            format_date(&self.plan_start_date),
            format_date(&self.plan_end_date),
            self.status.clone(),
            self.hardware_type.clone(),
            self.salesperson_name.clone(),
        ]
    }
}
