//! Database service layer
//!
//! This module provides a high-level interface to database operations,
//! including the mutations that span more than one table.

use chrono::Utc;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::database::{
    DashboardRepository, DatabasePool, OrderRepository, PaymentRepository, ProductRepository,
    ReportRepository, SupportRepository, UserRepository,
};
use crate::models::*;
use crate::utils::errors::AdminError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pool: DatabasePool,
    pub users: UserRepository,
    pub products: ProductRepository,
    pub orders: OrderRepository,
    pub payments: PaymentRepository,
    pub support: SupportRepository,
    pub reports: ReportRepository,
    pub dashboard: DashboardRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            orders: OrderRepository::new(pool.clone()),
            payments: PaymentRepository::new(pool.clone()),
            support: SupportRepository::new(pool.clone()),
            reports: ReportRepository::new(pool.clone()),
            dashboard: DashboardRepository::new(pool.clone()),
            pool,
        }
    }

    /// Apply a moderation action to a user account
    pub async fn moderate_user(
        &self,
        id: Uuid,
        action: UserAction,
    ) -> Result<Profile, AdminError> {
        let profile = self.users.find_by_id(id).await?.ok_or(AdminError::NotFound {
            entity: "user",
            id: id.to_string(),
        })?;

        let target = user_transition(action, profile.status).ok_or_else(|| {
            AdminError::InvalidStatusTransition {
                from: format!("{:?}", profile.status),
                to: action.as_str().to_string(),
            }
        })?;

        self.users.set_status(id, target).await
    }

    /// Review a pending product listing
    pub async fn review_product(
        &self,
        id: Uuid,
        decision: ProductStatus,
    ) -> Result<Product, AdminError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(AdminError::NotFound {
                entity: "product",
                id: id.to_string(),
            })?;

        if !review_transition_allowed(product.status, decision) {
            return Err(AdminError::InvalidStatusTransition {
                from: format!("{:?}", product.status),
                to: format!("{:?}", decision),
            });
        }

        let product = self.products.set_status(id, decision).await?;

        let verdict = match decision {
            ProductStatus::Approved => "Product approved",
            _ => "Product rejected",
        };
        self.record_activity(&self.pool, verdict, &product.name)
            .await?;

        Ok(product)
    }

    /// Transition an order through its fulfilment lifecycle.
    ///
    /// A refund additionally flips the payment state and records a negative
    /// refund transaction against the seller.
    pub async fn transition_order(
        &self,
        id: Uuid,
        target: OrderStatus,
    ) -> Result<Order, AdminError> {
        let order = self.orders.find_by_id(id).await?.ok_or(AdminError::NotFound {
            entity: "order",
            id: id.to_string(),
        })?;

        if !order_transition_allowed(order.status, order.payment, target) {
            return Err(AdminError::InvalidStatusTransition {
                from: format!("{:?}", order.status),
                to: format!("{:?}", target),
            });
        }

        if target == OrderStatus::Refunded {
            // The order update, the refund transaction and the activity entry
            // must land together, so run them in one database transaction.
            // The UPDATE re-checks the cancelled/paid state itself, which
            // closes the race where two concurrent refunds both pass the
            // guard above.
            let mut tx = self.pool.begin().await?;

            let refunded = self
                .orders
                .mark_refunded(&mut *tx, id)
                .await?
                .ok_or(AdminError::InvalidStatusTransition {
                    from: format!("{:?}", order.status),
                    to: format!("{:?}", target),
                })?;

            self.payments
                .insert_transaction(
                    &mut *tx,
                    CreateTransactionRequest {
                        txn_id: format!("TR-{}", &refunded.order_number),
                        txn_type: TxnType::Refund,
                        order_id: refunded.order_number.clone(),
                        seller: refunded.seller.clone(),
                        amount: -refunded.total,
                        status: TxnStatus::Processed,
                    },
                )
                .await?;
            self.record_activity(&mut *tx, "Order refunded", &refunded.order_number)
                .await?;

            tx.commit().await?;
            return Ok(refunded);
        }

        // Conditional UPDATE keyed on the status we just validated; a
        // concurrent transition makes it match zero rows.
        self.orders
            .try_set_status(id, order.status, target)
            .await?
            .ok_or(AdminError::InvalidStatusTransition {
                from: format!("{:?}", order.status),
                to: format!("{:?}", target),
            })
    }

    /// Approve a seller payout: record the payout transaction and retire
    /// the request
    pub async fn approve_payout(&self, id: Uuid) -> Result<Transaction, AdminError> {
        let request = self
            .payments
            .find_payout_request(id)
            .await?
            .ok_or(AdminError::NotFound {
                entity: "payout request",
                id: id.to_string(),
            })?;

        if request.requested_amount > request.available_balance {
            return Err(AdminError::InvalidInput(format!(
                "requested amount {} exceeds available balance {}",
                request.requested_amount, request.available_balance
            )));
        }

        let mut tx = self.pool.begin().await?;

        // Retiring the request first doubles as the concurrency guard: a
        // second approval of the same request deletes zero rows and rolls
        // back without writing a duplicate payout.
        if !self.payments.delete_payout_request(&mut *tx, id).await? {
            return Err(AdminError::NotFound {
                entity: "payout request",
                id: id.to_string(),
            });
        }

        let txn = self
            .payments
            .insert_transaction(
                &mut *tx,
                CreateTransactionRequest {
                    txn_id: format!("TP-{}", request.request_id),
                    txn_type: TxnType::Payout,
                    order_id: "-".to_string(),
                    seller: request.seller.clone(),
                    amount: request.requested_amount,
                    status: TxnStatus::Processed,
                },
            )
            .await?;

        self.record_activity(&mut *tx, "Seller payout processed", &request.seller)
            .await?;

        tx.commit().await?;
        Ok(txn)
    }

    /// Place a payout request on hold. The schema carries no hold state,
    /// so the decision is recorded on the activity feed only.
    pub async fn hold_payout(&self, id: Uuid) -> Result<PayoutRequest, AdminError> {
        let request = self
            .payments
            .find_payout_request(id)
            .await?
            .ok_or(AdminError::NotFound {
                entity: "payout request",
                id: id.to_string(),
            })?;

        self.record_activity(&self.pool, "Payout request held", &request.seller)
            .await?;

        Ok(request)
    }

    /// Decide a pending seller/product approval from the dashboard
    pub async fn decide_approval(
        &self,
        id: Uuid,
        approved: bool,
    ) -> Result<PendingApproval, AdminError> {
        let approval = self
            .dashboard
            .find_approval(id)
            .await?
            .ok_or(AdminError::NotFound {
                entity: "pending approval",
                id: id.to_string(),
            })?;

        let mut tx = self.pool.begin().await?;

        // The delete is the guard: a concurrent decision on the same
        // approval removes zero rows here and the transaction rolls back.
        if !self.dashboard.delete_approval(&mut *tx, id).await? {
            return Err(AdminError::NotFound {
                entity: "pending approval",
                id: id.to_string(),
            });
        }

        let activity = match (approval.approval_type, approved) {
            (ApprovalType::Seller, true) => "Seller registration approved",
            (ApprovalType::Seller, false) => "Seller registration rejected",
            (ApprovalType::Product, true) => "Product approved",
            (ApprovalType::Product, false) => "Product rejected",
        };
        self.record_activity(&mut *tx, activity, &approval.name)
            .await?;

        tx.commit().await?;
        Ok(approval)
    }

    /// Transition a support ticket's resolution status
    pub async fn transition_ticket(
        &self,
        id: Uuid,
        target: TicketStatus,
    ) -> Result<SupportTicket, AdminError> {
        let ticket = self
            .support
            .find_ticket(id)
            .await?
            .ok_or(AdminError::NotFound {
                entity: "ticket",
                id: id.to_string(),
            })?;

        if !ticket_transition_allowed(ticket.status, target) {
            return Err(AdminError::InvalidStatusTransition {
                from: format!("{:?}", ticket.status),
                to: format!("{:?}", target),
            });
        }

        self.support.set_ticket_status(id, target).await
    }

    async fn record_activity<'e, E>(
        &self,
        executor: E,
        activity: &str,
        user: &str,
    ) -> Result<(), AdminError>
    where
        E: PgExecutor<'e>,
    {
        self.dashboard
            .record_activity(
                executor,
                CreateActivityRequest {
                    activity: activity.to_string(),
                    activity_user: user.to_string(),
                    date_text: Utc::now().format("%d %b %Y").to_string(),
                },
            )
            .await?;
        Ok(())
    }
}
