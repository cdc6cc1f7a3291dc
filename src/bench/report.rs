// Wed Feb 04 2026 - Alex

use colored::Colorize;

/// One ranked line of the final report.
pub struct ReportRow {
    pub rank: usize,
    pub name: String,
    pub elapsed_cycles: u64,
    pub cycles_per_byte: f64,
    pub failed: u64,
}

pub struct RunReport {
    pub rows: Vec<ReportRow>,
    pub trials: usize,
    pub total_window_bytes: u64,
}

impl RunReport {
    pub fn print(&self) {
        for row in &self.rows {
            let failed = if row.failed == 0 {
                format!("{} failed", row.failed).green()
            } else {
                format!("{} failed", row.failed).red()
            };

            println!(
                "{} | {:<32} | {:>14} cycles = {:>8.3} cycles/byte | {}",
                row.rank, row.name, row.elapsed_cycles, row.cycles_per_byte, failed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_carry_rank_order() {
        let report = RunReport {
            rows: vec![
                ReportRow {
                    rank: 0,
                    name: "Simple".to_string(),
                    elapsed_cycles: 100,
                    cycles_per_byte: 0.5,
                    failed: 0,
                },
                ReportRow {
                    rank: 1,
                    name: "Broken".to_string(),
                    elapsed_cycles: 10,
                    cycles_per_byte: 0.05,
                    failed: 3,
                },
            ],
            trials: 2,
            total_window_bytes: 200,
        };

        assert_eq!(report.rows[0].rank, 0);
        assert_eq!(report.rows[1].rank, 1);
        report.print();
    }
}
