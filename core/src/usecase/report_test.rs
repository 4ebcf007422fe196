
#[cfg(test)]
mod tests {
    use crate::usecase::report::{render_text, report_file_name, ReportKind, ReportPeriod, ReportUseCase};
    use crate::model::{DayState, Percent, RowTotals, SavedDay, Settings};
    use chrono::NaiveDate;

    fn saved(y: i32, m: u32, d: u32, entradas: f64) -> SavedDay {
        let mut state = DayState::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Settings::new("Real Cariri", Percent::new(40.0), Percent::new(30.0)),
        );
        state.log.entradas.manha = entradas;
        state.log.premios.manha = 10.0;
        SavedDay::snapshot(&state)
    }

    fn archive() -> Vec<SavedDay> {
        vec![
            saved(2025, 1, 8, 100.0),  // W02
            saved(2024, 12, 30, 50.0), // W01 of 2025, December
            saved(2025, 1, 6, 200.0),  // W02
            saved(2025, 2, 3, 20.0),   // W06
        ]
    }

    #[test]
    fn test_periods_newest_first() {
        let days = archive();
        let usecase = ReportUseCase::new(&days);

        assert_eq!(
            usecase.periods(ReportKind::Weekly),
            vec![
                ReportPeriod::Week { year: 2025, week: 6 },
                ReportPeriod::Week { year: 2025, week: 2 },
                ReportPeriod::Week { year: 2025, week: 1 },
            ]
        );
        assert_eq!(
            usecase.periods(ReportKind::Monthly),
            vec![
                ReportPeriod::Month { year: 2025, month: 2 },
                ReportPeriod::Month { year: 2025, month: 1 },
                ReportPeriod::Month { year: 2024, month: 12 },
            ]
        );
    }

    #[test]
    fn test_week_report_sums_stored_totals() {
        let days = archive();
        let report = ReportUseCase::new(&days).report(ReportPeriod::Week { year: 2025, week: 2 });

        assert_eq!(report.label, "Semana de 06/01 a 12/01/2025");
        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].id, "2025-01-06");
        assert_eq!(report.days[1].id, "2025-01-08");
        assert_eq!(
            report.totals,
            RowTotals {
                entradas: 300.0,
                comissao: 120.0,
                premios: 20.0,
                saldo_final: 160.0,
            }
        );
    }

    #[test]
    fn test_month_report_does_not_recompute() {
        let mut days = archive();
        // A stored total that no longer matches its log must be reported as stored.
        days[0].totals.comissao = 1.0;
        let report = ReportUseCase::new(&days).report(ReportPeriod::Month { year: 2025, month: 1 });

        assert_eq!(report.label, "janeiro de 2025");
        assert_eq!(report.days.len(), 2);
        assert_eq!(report.totals.comissao, 81.0);
    }

    #[test]
    fn test_groups() {
        let days = archive();
        let usecase = ReportUseCase::new(&days);

        let weeks = usecase.weekly_groups();
        assert_eq!(weeks.len(), 3);
        assert_eq!(weeks[0].period.key(), "2025-W06");
        assert_eq!(weeks[2].days[0].id, "2024-12-30");
        let total_days: usize = weeks.iter().map(|r| r.days.len()).sum();
        assert_eq!(total_days, 4);

        let months = usecase.monthly_groups();
        assert_eq!(months[2].label, "dezembro de 2024");
        assert_eq!(usecase.month_report(2024, 12), months[2]);
        assert_eq!(usecase.week_report(2025, 6), weeks[0]);
    }

    #[test]
    fn test_empty_period() {
        let days = archive();
        let usecase = ReportUseCase::new(&days);
        let report = usecase.report(ReportPeriod::Month { year: 2023, month: 5 });
        assert!(report.is_empty());
        assert_eq!(report.totals, RowTotals::default());

        assert!(ReportUseCase::new(&[]).latest(ReportKind::Weekly).is_none());
        assert_eq!(
            usecase.latest(ReportKind::Monthly).unwrap().period,
            ReportPeriod::Month { year: 2025, month: 2 }
        );
    }

    #[test]
    fn test_parse_and_key() {
        let week = ReportPeriod::parse(ReportKind::Weekly, "2025-W2").unwrap();
        assert_eq!(week, ReportPeriod::Week { year: 2025, week: 2 });
        assert_eq!(week.key(), "2025-W02");

        let month = ReportPeriod::parse(ReportKind::Monthly, "2024-12").unwrap();
        assert_eq!(month.key(), "2024-12");
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()));
        assert!(!week.contains(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()));
    }

    #[test]
    fn test_render_text() {
        let days = archive();
        let report = ReportUseCase::new(&days).report(ReportPeriod::Week { year: 2025, week: 2 });
        let generated_at = NaiveDate::from_ymd_opt(2025, 1, 12)
            .unwrap()
            .and_hms_opt(18, 30, 5)
            .unwrap();
        let text = render_text(&report, "Real Cariri", generated_at);

        assert!(text.starts_with("Relatório Semanal - Real Cariri\nSemana de 06/01 a 12/01/2025\n"));
        assert!(text.contains("06/01/2025"));
        assert!(text.contains("R$ 300,00"));
        assert!(text.contains("R$ 160,00"));
        assert!(text.ends_with("Exportado em: 12/01/2025 às 18:30:05\n"));

        assert_eq!(report_file_name(&report, "Real Cariri"), "relatorio_semanal_Real_Cariri_2025-W02.txt");
    }

    #[test]
    fn test_file_name_stays_inside_directory() {
        let days = archive();
        let report = ReportUseCase::new(&days).month_report(2025, 1);

        let name = report_file_name(&report, "../Banca/União\\x");
        assert_eq!(name, "relatorio_mensal____Banca_União_x_2025-01.txt");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
        assert_eq!(std::path::Path::new(&name).components().count(), 1);
    }
}
