pub mod access;
pub mod dashboard;

pub use self::access::model::MyAccessResponse;
pub use self::dashboard::model::DashboardResponse;
