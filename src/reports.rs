// 📊 Report Engine - read-only aggregations over payments and subscriptions
//
// Every report is independent: it borrows the same records and never
// mutates them. Reductions over possibly-empty inputs either fold from
// zero (sums) or return `Option` (first payment, biggest spender).

use chrono::{Datelike, Local, Month, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::entities::{Customer, Payment, Product, Subscription};

/// Month used by the monthly revenue report
pub const DEFAULT_REVENUE_MONTH: Month = Month::June;

// ============================================================================
// REPORT VALUES
// ============================================================================

/// The same sum computed three ways
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSums {
    /// Fold from zero
    pub exact: Decimal,

    /// Reduce without identity (None only for an empty payment)
    pub optional: Option<Decimal>,

    /// Binary floating point - may differ from `exact` in the last digits
    pub float: f64,
}

impl PaymentSums {
    /// The optional variant with its zero fallback applied
    pub fn optional_or_zero(&self) -> Decimal {
        self.optional.unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProducts {
    pub customer: Customer,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSpend {
    pub customer: Customer,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionLine {
    pub customer: Customer,
    pub active: bool,
    pub months: u32,
    pub amount_paid: Decimal,
}

/// Snapshot of every report for one run, in output order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreReport {
    pub evaluated_on: NaiveDate,
    pub sorted_purchase_dates: Vec<NaiveDate>,
    pub first_payment: Option<PaymentSums>,
    pub total_revenue: Decimal,
    pub units_sold: BTreeMap<String, u64>,
    pub products_per_customer: Vec<CustomerProducts>,
    pub biggest_spender: Option<CustomerSpend>,
    pub revenue_month: String,
    pub revenue_for_month: Decimal,
    pub active_subscription_months: Option<u32>,
    pub subscriptions: Vec<SubscriptionLine>,
}

impl StoreReport {
    pub fn summary(&self) -> String {
        format!(
            "Report for {}: {} payments, revenue {}, {} revenue {}, {} subscriptions",
            self.evaluated_on,
            self.sorted_purchase_dates.len(),
            self.total_revenue,
            self.revenue_month,
            self.revenue_for_month,
            self.subscriptions.len()
        )
    }
}

// ============================================================================
// REPORT ENGINE
// ============================================================================

pub struct ReportEngine {
    /// Month filtered by the monthly revenue report (default: June)
    pub revenue_month: Month,

    /// Reference date for active subscriptions (default: local today)
    pub today: NaiveDate,
}

impl ReportEngine {
    pub fn new() -> Self {
        ReportEngine {
            revenue_month: DEFAULT_REVENUE_MONTH,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_revenue_month(mut self, month: Month) -> Self {
        self.revenue_month = month;
        self
    }

    /// Run every report over the same records
    pub fn run(&self, payments: &[Payment], subscriptions: &[Subscription]) -> StoreReport {
        info!(
            payments = payments.len(),
            subscriptions = subscriptions.len(),
            today = %self.today,
            "running store reports"
        );

        let sorted_purchase_dates = self
            .sort_by_purchase_date(payments)
            .iter()
            .map(|payment| payment.purchase_date)
            .collect();

        let products_per_customer = self
            .products_per_customer(payments)
            .into_iter()
            .map(|(customer, products)| CustomerProducts { customer, products })
            .collect();

        let biggest_spender = self
            .biggest_spender(payments)
            .map(|(customer, total)| CustomerSpend { customer, total });

        let report = StoreReport {
            evaluated_on: self.today,
            sorted_purchase_dates,
            first_payment: self.first_payment_sums(payments),
            total_revenue: self.total_revenue(payments),
            units_sold: self.units_sold_per_product(payments),
            products_per_customer,
            biggest_spender,
            revenue_month: self.revenue_month.name().to_string(),
            revenue_for_month: self.revenue_for_month(payments),
            active_subscription_months: self.active_subscription_months(subscriptions),
            subscriptions: self.subscription_lines(subscriptions),
        };

        info!("{}", report.summary());
        report
    }

    /// Payments ordered by purchase date (stable: ties keep input order)
    pub fn sort_by_purchase_date<'a>(&self, payments: &'a [Payment]) -> Vec<&'a Payment> {
        let mut sorted: Vec<&Payment> = payments.iter().collect();
        sorted.sort_by_key(|payment| payment.purchase_date);
        sorted
    }

    /// Product-price sum of a single payment, three ways
    pub fn payment_sums(&self, payment: &Payment) -> PaymentSums {
        let prices = || payment.products.iter().map(|product| product.price);

        let exact = prices().fold(Decimal::ZERO, |acc, price| acc + price);
        let optional = prices().reduce(|a, b| a + b);
        let float = prices()
            .map(|price| price.to_f64().unwrap_or(0.0))
            .fold(0.0_f64, |acc, price| acc + price);

        PaymentSums {
            exact,
            optional,
            float,
        }
    }

    /// Sums of the first payment in input order; None without payments
    pub fn first_payment_sums(&self, payments: &[Payment]) -> Option<PaymentSums> {
        let first = payments.first()?;
        let sums = self.payment_sums(first);
        debug!(exact = %sums.exact, float = sums.float, "first payment sums");
        Some(sums)
    }

    /// Sum of every payment total
    pub fn total_revenue(&self, payments: &[Payment]) -> Decimal {
        payments
            .iter()
            .map(Payment::total)
            .fold(Decimal::ZERO, |acc, total| acc + total)
    }

    /// Units sold per product name (same name = same bucket)
    pub fn units_sold_per_product(&self, payments: &[Payment]) -> BTreeMap<String, u64> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();

        for product in payments.iter().flat_map(|payment| &payment.products) {
            *counts.entry(product.name.clone()).or_insert(0) += 1;
        }

        debug!(distinct = counts.len(), "units sold per product");
        counts
    }

    /// All products bought by each customer, in payment order
    pub fn products_per_customer(&self, payments: &[Payment]) -> BTreeMap<Customer, Vec<Product>> {
        let mut grouped: BTreeMap<Customer, Vec<Product>> = BTreeMap::new();

        for payment in payments {
            grouped
                .entry(payment.customer.clone())
                .or_default()
                .extend(payment.products.iter().cloned());
        }

        grouped
    }

    /// Total spend per customer
    pub fn spend_per_customer(&self, payments: &[Payment]) -> BTreeMap<Customer, Decimal> {
        let mut totals: BTreeMap<Customer, Decimal> = BTreeMap::new();

        for payment in payments {
            *totals.entry(payment.customer.clone()).or_insert(Decimal::ZERO) += payment.total();
        }

        totals
    }

    /// Customer with the highest total spend.
    ///
    /// Ties go to the last customer in map order (greatest name).
    /// None when there are no payments.
    pub fn biggest_spender(&self, payments: &[Payment]) -> Option<(Customer, Decimal)> {
        let spender = self
            .spend_per_customer(payments)
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1));

        if spender.is_none() {
            warn!("no payments - biggest spender is undefined");
        }
        spender
    }

    /// Revenue of payments whose purchase month is the configured month (any year)
    pub fn revenue_for_month(&self, payments: &[Payment]) -> Decimal {
        let month = self.revenue_month.number_from_month();

        let revenue = payments
            .iter()
            .filter(|payment| payment.purchase_date.month() == month)
            .map(Payment::total)
            .fold(Decimal::ZERO, |acc, total| acc + total);

        debug!(month = self.revenue_month.name(), %revenue, "monthly revenue");
        revenue
    }

    /// Duration of the first active subscription
    pub fn active_subscription_months(&self, subscriptions: &[Subscription]) -> Option<u32> {
        subscriptions
            .iter()
            .find(|subscription| subscription.is_active())
            .map(|subscription| subscription.duration_in_months(self.today))
    }

    pub fn subscription_durations(&self, subscriptions: &[Subscription]) -> Vec<u32> {
        subscriptions
            .iter()
            .map(|subscription| subscription.duration_in_months(self.today))
            .collect()
    }

    pub fn amounts_paid(&self, subscriptions: &[Subscription]) -> Vec<Decimal> {
        subscriptions
            .iter()
            .map(|subscription| subscription.amount_paid(self.today))
            .collect()
    }

    fn subscription_lines(&self, subscriptions: &[Subscription]) -> Vec<SubscriptionLine> {
        subscriptions
            .iter()
            .map(|subscription| SubscriptionLine {
                customer: subscription.customer.clone(),
                active: subscription.is_active(),
                months: subscription.duration_in_months(self.today),
                amount_paid: subscription.amount_paid(self.today),
            })
            .collect()
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
