use super::Report;

/// Print just the key answer: the balance difference for comparisons, the
/// closing balance for projections, variant names otherwise.
pub fn print_minimal(report: &Report) {
    match report {
        Report::Comparison { output, .. } => println!("{}", output.result.balance_difference),
        Report::Projection { output, .. } => {
            println!("{}", output.result.final_total_investment)
        }
        Report::Variants(set) => {
            for name in set.names() {
                println!("{}", name);
            }
        }
    }
}
