//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabaseConfig, DatabasePool, create_pool, health_check, run_migrations};
pub use repositories::{
    DashboardRepository, OrderRepository, PaymentRepository, ProductRepository, ReportRepository,
    SupportRepository, UserRepository,
};
pub use service::DatabaseService;
