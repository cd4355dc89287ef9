/// Currency every published rate is quoted against
pub const BASE_CURRENCY: &str = "EUR";

/// First business day of the euro reference rate series (1999-01-04)
pub const EARLIEST_RATE_DATE: (i32, u32, u32) = (1999, 1, 4);

/// Currencies served when no explicit selection is configured
pub const DEFAULT_CURRENCIES: &[&str] = &["USD", "GBP"];

/// Length of an ISO 4217 currency code
pub const CURRENCY_CODE_LEN: usize = 3;

/// Wire format of dates in the feed and in request paths
pub const DATE_FORMAT: &str = "%Y-%m-%d";
