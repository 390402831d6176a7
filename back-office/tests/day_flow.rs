//! End-to-end flow: roster -> weekly schedule -> attendance sheet -> daily
//! report, the way the pages chain through the shared store.

use back_office::BackOfficeStore;
use back_office::attendance::AttendanceService;
use back_office::expenses::ExpenseService;
use back_office::reporting::ReportService;
use back_office::repository::RosterRepository;
use back_office::requests::RequestService;
use back_office::schedule::ScheduleService;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal_macros::dec;
use shared::models::{
    AttendanceUpdate, EmployeeCreate, ExpenseCreate, RequestCreate, RequestKind, Role,
    ServicePeriod, ShiftCellPatch, Weekday, Zone,
};

fn hm(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

// 2025-06-02 is a Monday
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn full_week_to_report_flow() {
    let store = BackOfficeStore::open_in_memory().unwrap();
    let roster = RosterRepository::new(store.clone());

    roster
        .create(EmployeeCreate {
            name: "Marco".into(),
            role: Role::Server,
            zone: Zone::FloorBar,
            hourly_rate: dec!(14),
        })
        .unwrap();
    roster
        .create(EmployeeCreate {
            name: "Bruno".into(),
            role: Role::Bartender,
            zone: Zone::FloorBar,
            hourly_rate: dec!(16),
        })
        .unwrap();

    // schedule both for Monday lunch, then stretch Bruno's shift
    let schedule = ScheduleService::new(store.clone());
    for id in ["marco", "bruno"] {
        schedule
            .set_cell(
                id,
                Weekday::Mon,
                ShiftCellPatch {
                    active: Some(true),
                    service: Some(ServicePeriod::Lunch),
                    ..Default::default()
                },
            )
            .unwrap();
    }
    schedule
        .set_cell(
            "bruno",
            Weekday::Mon,
            ShiftCellPatch {
                service: Some(ServicePeriod::Custom),
                start: Some(hm(11, 0)),
                end: Some(hm(17, 0)),
                ..Default::default()
            },
        )
        .unwrap();

    // grid footer: 4h * 14 + 6h * 16
    let totals = schedule.week_totals(Some(Zone::FloorBar)).unwrap();
    assert_eq!(totals.total_hours, dec!(10));
    assert_eq!(totals.total_cost, dec!(152));

    // opening the sheet derives the day's rows once
    let attendance = AttendanceService::new(store.clone());
    assert_eq!(attendance.sync_for_date(monday()).unwrap(), 2);
    assert_eq!(attendance.sync_for_date(monday()).unwrap(), 0);

    // the sheet is edited by hand: break and revenue
    attendance
        .update_record(
            monday(),
            "marco",
            AttendanceUpdate {
                pause_minutes: Some(30),
                individual_revenue: Some(Some(dec!(600))),
                ..Default::default()
            },
        )
        .unwrap();
    attendance
        .update_record(
            monday(),
            "bruno",
            AttendanceUpdate {
                individual_revenue: Some(Some(dec!(400))),
                ..Default::default()
            },
        )
        .unwrap();

    // a lunch-time expense
    ExpenseService::new(store.clone())
        .add(ExpenseCreate {
            date: monday(),
            label: "Fish delivery".into(),
            amount: dec!(35.50),
            category: Some("supplies".into()),
            payment_method: Some("card".into()),
        })
        .unwrap();

    // Bruno announces he'll be late tomorrow; the manager treats it
    let requests = RequestService::new(store.clone());
    let request = requests
        .submit(RequestCreate {
            employee_id: "bruno".into(),
            kind: RequestKind::Late,
            date: monday() + chrono::Duration::days(1),
            time: hm(12, 30),
            message: Some("dentist".into()),
        })
        .unwrap();
    requests.mark_treated(&request.id).unwrap();
    assert!(requests.list_untreated().unwrap().is_empty());

    // dashboard figures
    let summary = ReportService::new(store.clone())
        .daily_summary(monday())
        .unwrap();
    // marco 3.5h paid, bruno 6h
    assert_eq!(summary.total_hours, dec!(9.5));
    // 3.5*14 + 6*16
    assert_eq!(summary.labor_cost, dec!(145));
    assert_eq!(summary.real_cost, dec!(210.25));
    assert_eq!(summary.total_revenue, dec!(1000));
    assert_eq!(summary.revenue_bar, dec!(400));
    assert_eq!(summary.total_expenses, dec!(35.50));
    assert_eq!(summary.labor_cost_ratio, Some(dec!(0.21025)));
    assert_eq!(summary.margin, dec!(819.50));
    assert_eq!(summary.margin_after_charges, dec!(754.25));

    // deleting Marco leaves his rows orphaned but everything keeps working
    roster.delete("marco").unwrap();
    let summary = ReportService::new(store).daily_summary(monday()).unwrap();
    assert_eq!(summary.total_hours, dec!(6));
    assert_eq!(summary.total_revenue, dec!(400));
}
