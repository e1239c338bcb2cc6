use std::env;
use chrono_tz::Tz;

pub const MAX_LEAD_DAYS: i64 = 365;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_token: String,
    pub business_timezone: Tz,
    pub public_lead_days: i64, // Booking form
    pub admin_lead_days: i64,  // Admin calendar
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_token: env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN must be set"),
            business_timezone: env::var("BUSINESS_TIMEZONE")
                .unwrap_or_else(|_| "UTC".to_string())
                .parse()
                .expect("BUSINESS_TIMEZONE must be an IANA timezone name"),
            public_lead_days: parse_lead_days(&env::var("PUBLIC_LEAD_DAYS").unwrap_or_else(|_| "2".to_string()))
                .expect("PUBLIC_LEAD_DAYS must be a number between 0 and 365"),
            admin_lead_days: parse_lead_days(&env::var("ADMIN_LEAD_DAYS").unwrap_or_else(|_| "0".to_string()))
                .expect("ADMIN_LEAD_DAYS must be a number between 0 and 365"),
        }
    }
}

pub fn parse_lead_days(value: &str) -> Option<i64> {
    value.trim().parse().ok().filter(|days| (0..=MAX_LEAD_DAYS).contains(days))
}
