// 🛒 Sample Store - the records every run reports on
//
// All dates are relative to `today`, so the binary produces the same
// shape of output on any day while tests pin `today` to a fixed date.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::{days_ago, months_ago};
use crate::entities::{Customer, Payment, Product, Subscription};

/// Sample records: payments in insertion order, then subscriptions
#[derive(Debug, Clone)]
pub struct SampleStore {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub payments: Vec<Payment>,
    pub subscriptions: Vec<Subscription>,
}

/// Build the sample catalogue, purchases and subscriptions
pub fn build_sample_store(today: NaiveDate) -> Result<SampleStore> {
    let musica = Product::try_new("Música 1", "musica1.mp3", Decimal::new(299, 2))?;
    let video = Product::try_new("Vídeo 1", "video1.mp4", Decimal::new(499, 2))?;
    let imagem = Product::try_new("Imagem 1", "imagem1.jpg", Decimal::new(199, 2))?;

    let joao = Customer::try_new("João")?;
    let maria = Customer::try_new("Maria")?;

    let yesterday = days_ago(today, 1).context("Failed to compute yesterday")?;
    let one_month_ago = months_ago(today, 1).context("Failed to compute date 1 month ago")?;
    let two_months_ago = months_ago(today, 2).context("Failed to compute date 2 months ago")?;
    let three_months_ago = months_ago(today, 3).context("Failed to compute date 3 months ago")?;

    let payments = vec![
        Payment::new(vec![musica.clone(), video.clone()], today, joao.clone()),
        Payment::new(vec![imagem.clone()], yesterday, maria.clone()),
        Payment::new(vec![musica.clone()], one_month_ago, joao.clone()),
    ];

    let fee = Decimal::new(9998, 2);
    let subscriptions = vec![
        Subscription::try_new(fee, one_month_ago, None, joao.clone())?,
        Subscription::try_new(fee, two_months_ago, Some(one_month_ago), maria.clone())?,
        Subscription::try_new(fee, three_months_ago, Some(two_months_ago), joao.clone())?,
    ];

    Ok(SampleStore {
        products: vec![musica, video, imagem],
        customers: vec![joao, maria],
        payments,
        subscriptions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_store_shape() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let store = build_sample_store(today).unwrap();

        assert_eq!(store.products.len(), 3);
        assert_eq!(store.customers.len(), 2);
        assert_eq!(store.payments.len(), 3);
        assert_eq!(store.subscriptions.len(), 3);

        assert_eq!(store.payments[0].total(), dec!(7.98));
        assert_eq!(store.payments[1].purchase_date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        assert_eq!(store.payments[2].purchase_date, NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());

        assert!(store.subscriptions[0].is_active());
        assert_eq!(
            store.subscriptions[2].end_date,
            Some(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())
        );
    }

    #[test]
    fn test_sample_store_month_end_clamping() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let store = build_sample_store(today).unwrap();

        // 31 Mar - 1 month = 28 Feb
        assert_eq!(
            store.payments[2].purchase_date,
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_sample_store_out_of_range() {
        assert!(build_sample_store(NaiveDate::MIN).is_err());
    }
}
