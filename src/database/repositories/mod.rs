//! Repository implementations for all admin-managed tables

pub mod dashboard;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;
pub mod support;
pub mod user;

pub use dashboard::DashboardRepository;
pub use order::OrderRepository;
pub use payment::PaymentRepository;
pub use product::ProductRepository;
pub use report::ReportRepository;
pub use support::SupportRepository;
pub use user::UserRepository;
