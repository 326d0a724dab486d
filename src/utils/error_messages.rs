//! User-facing messages attached to form violations

pub const FIRST_NAME_TOO_SHORT: &str = "First name must be at least 2 characters long";
pub const FIRST_NAME_TOO_LONG: &str = "First name must be at most 70 characters long";

pub const LAST_NAME_TOO_SHORT: &str = "Last name must be at least 2 characters long";
pub const LAST_NAME_TOO_LONG: &str = "Last name must be at most 70 characters long";

pub const COUNTRY_TOO_SHORT: &str = "Country must be at least 2 characters";
pub const COUNTRY_TOO_LONG: &str = "Country must be at most 70 characters";

pub const STATE_TOO_SHORT: &str = "State must be at least 2 characters";
pub const STATE_TOO_LONG: &str = "State must be at most 70 characters";

pub const CITY_TOO_SHORT: &str = "City must be at least 2 characters";
pub const CITY_TOO_LONG: &str = "City must be at most 70 characters";

pub const ADDRESS_TOO_SHORT: &str = "Address must be at least 2 characters";
pub const ADDRESS_TOO_LONG: &str = "Address must be at most 100 characters";

pub const INVALID_ZIP: &str = "ZIP code must be between 4 and 10 digits";

pub const INVALID_PHONE: &str = "Invalid phone number";

pub const INVALID_URL: &str = "Invalid URL format";
pub const NOT_A_GITHUB_URL: &str = "URL should be a GitHub profile";

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const EMAIL_NOT_VALID: &str = "Email is not valid";
pub const EMAIL_PLUS_SIGN: &str = "Email should not contain '+' sign";
pub const EMAIL_SUBDOMAIN: &str = "Email should not contain subdomains";

pub const NO_JOBS: &str = "At least one job should be added";

pub const JOB_TITLE_TOO_SHORT: &str = "Title must be at least 2 characters long";
pub const JOB_TITLE_TOO_LONG: &str = "Title must be at most 70 characters long";

pub const JOB_COMPANY_TOO_SHORT: &str = "Company must be at least 2 characters long";
pub const JOB_COMPANY_TOO_LONG: &str = "Company must be at most 90 characters long";

pub const JOB_DESCRIPTION_TOO_SHORT: &str = "Description must be at least 2 characters long";
pub const JOB_DESCRIPTION_TOO_LONG: &str = "Description must be at most 500 characters long";

pub const JOB_FROM_REQUIRED: &str = "From date is required";
pub const JOB_TO_REQUIRED: &str = "To date is required";
pub const JOB_DATES_REVERSED: &str = "From date should be less than To date";

pub const EMPTY_FILE: &str = "Cannot upload empty file";
