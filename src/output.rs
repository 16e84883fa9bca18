// 🖨️ Report output - plain lines, one block per report, fixed order
//
// Rendering is separate from computing so the exact text can be tested
// against any `io::Write`.

use anyhow::Result;
use std::io::Write;

use crate::reports::StoreReport;

pub const NO_PURCHASES: &str = "nenhuma compra registrada";
pub const NO_ACTIVE_SUBSCRIPTION: &str = "nenhuma assinatura ativa";

pub fn render<W: Write>(report: &StoreReport, out: &mut W) -> Result<()> {
    writeln!(out, "Pagamentos ordenados:")?;
    for date in &report.sorted_purchase_dates {
        writeln!(out, "{}", date)?;
    }

    match &report.first_payment {
        Some(sums) => {
            writeln!(out, "Soma dos valores do primeiro pagamento: {}", sums.exact)?;
            writeln!(
                out,
                "Soma dos valores do primeiro pagamento (Optional): {}",
                sums.optional_or_zero()
            )?;
            writeln!(
                out,
                "Soma dos valores do primeiro pagamento (double): {}",
                format_float(sums.float)
            )?;
        }
        None => {
            writeln!(out, "Soma dos valores do primeiro pagamento: {}", NO_PURCHASES)?;
        }
    }

    writeln!(out, "Valor total dos pagamentos: {}", report.total_revenue)?;

    writeln!(out, "Quantidade de cada produto vendido:")?;
    for (name, count) in &report.units_sold {
        writeln!(out, "{}: {}", name, count)?;
    }

    writeln!(out, "Mapa de cliente -> produtos:")?;
    for entry in &report.products_per_customer {
        let names: Vec<&str> = entry.products.iter().map(|p| p.name.as_str()).collect();
        writeln!(out, "Cliente: {}", entry.customer)?;
        writeln!(out, "Produtos: {}", names.join(", "))?;
        writeln!(out)?;
    }

    match &report.biggest_spender {
        Some(spender) => writeln!(out, "Cliente que gastou mais: {}", spender.customer)?,
        None => writeln!(out, "Cliente que gastou mais: {}", NO_PURCHASES)?,
    }

    writeln!(out, "Faturamento do mês: {}", report.revenue_for_month)?;

    match report.active_subscription_months {
        Some(months) => writeln!(out, "Tempo em meses da assinatura ativa: {}", months)?,
        None => writeln!(
            out,
            "Tempo em meses da assinatura ativa: {}",
            NO_ACTIVE_SUBSCRIPTION
        )?,
    }

    for line in &report.subscriptions {
        writeln!(out, "Tempo em meses da assinatura: {}", line.months)?;
    }
    for line in &report.subscriptions {
        writeln!(out, "Valor pago na assinatura até o momento: {}", line.amount_paid)?;
    }

    Ok(())
}

/// Whole floats keep one decimal ("0.0"), like a double printed on the JVM
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportEngine;
    use crate::sample::build_sample_store;
    use chrono::NaiveDate;

    fn render_to_string(report: &StoreReport) -> String {
        let mut buf = Vec::new();
        render(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_sample_store() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let store = build_sample_store(today).unwrap();
        let report = ReportEngine::new()
            .with_today(today)
            .run(&store.payments, &store.subscriptions);

        let expected = "\
Pagamentos ordenados:
2025-05-15
2025-06-14
2025-06-15
Soma dos valores do primeiro pagamento: 7.98
Soma dos valores do primeiro pagamento (Optional): 7.98
Soma dos valores do primeiro pagamento (double): 7.98
Valor total dos pagamentos: 12.96
Quantidade de cada produto vendido:
Imagem 1: 1
Música 1: 2
Vídeo 1: 1
Mapa de cliente -> produtos:
Cliente: João
Produtos: Música 1, Vídeo 1, Música 1

Cliente: Maria
Produtos: Imagem 1

Cliente que gastou mais: João
Faturamento do mês: 9.97
Tempo em meses da assinatura ativa: 1
Tempo em meses da assinatura: 1
Tempo em meses da assinatura: 1
Tempo em meses da assinatura: 1
Valor pago na assinatura até o momento: 99.98
Valor pago na assinatura até o momento: 99.98
Valor pago na assinatura até o momento: 99.98
";

        assert_eq!(render_to_string(&report), expected);
    }

    #[test]
    fn test_render_without_purchases() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let report = ReportEngine::new().with_today(today).run(&[], &[]);

        let text = render_to_string(&report);

        assert!(text.contains("Cliente que gastou mais: nenhuma compra registrada"));
        assert!(text.contains("Valor total dos pagamentos: 0"));
        assert!(text.contains("Faturamento do mês: 0"));
        assert!(text.contains("Tempo em meses da assinatura ativa: nenhuma assinatura ativa"));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(7.98), "7.98");
    }
}
