//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod dashboard;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;
pub mod status;
pub mod support;
pub mod user;

// Re-export commonly used models
pub use dashboard::{ApprovalType, CreateActivityRequest, PendingApproval, RecentActivity};
pub use order::{Order, OrderPaymentStatus, OrderStatus, order_transition_allowed};
pub use payment::{
    CommissionSetting, CreateTransactionRequest, PayoutRequest, Transaction, TxnStatus, TxnType,
    UpdateCommissionRequest,
};
pub use product::{Product, ProductStatus, review_transition_allowed};
pub use report::{ReportCategory, ReportDetailed, SalesDaily};
pub use status::{Badge, BadgeTone, StatusBadge};
pub use support::{
    CreateFaqRequest, Faq, SupportTicket, TicketPriority, TicketStatus, TicketUserType,
    UpdateFaqRequest, ticket_transition_allowed,
};
pub use user::{AppRole, Profile, UserAccount, UserAction, UserStatus, user_transition};
