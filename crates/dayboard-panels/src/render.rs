/*
[INPUT]:  Typed backend payloads (mail, tasks, calendar, directions, plan-mail, assign queue)
[OUTPUT]: Formatted strings written into panel document elements
[POS]:    Panel renderer - pure projection of payload fields onto element ids
[UPDATE]: When a panel gains fields or a display format changes
*/

use dayboard_adapter::{
    ActionableMessage, CalendarWeek, DirectionsResult, GmailSummary, PlanMail, Snapshot,
    TaskSummary,
};

use crate::document::Document;

/// Placeholder written wherever a payload has nothing to show
pub const NO_DATA: &str = "no data";

pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Days covered by the calendar panel
pub const CALENDAR_DAYS: usize = 5;

const HOUR_MS: u64 = 60 * 60 * 1000;
const MINUTE_MS: u64 = 60 * 1000;

/// `5_400_000` -> `"1h 30m free"`
pub fn convert_time(ms: u64) -> String {
    let hours = ms / HOUR_MS;
    let minutes = (ms % HOUR_MS) / MINUTE_MS;
    format!("{hours}h {minutes}m free")
}

/// Day label for the `index`-th column of a week starting on `start_day`
pub fn day_label(start_day: u8, index: usize) -> &'static str {
    DAYS[(start_day as usize + index) % DAYS.len()]
}

pub fn render_gmail_settings(document: &mut Document, n_days: u32, m_hours: u32) {
    document.set_text("gmailNDays", n_days.to_string());
    document.set_text("gmailMHours", m_hours.to_string());
}

pub fn render_gmail(document: &mut Document, snapshot: &Snapshot<GmailSummary>) {
    let Some(summary) = snapshot.data() else {
        for id in [
            "gmailUnreadEmailsDays",
            "gmailUnreadEmailsHours",
            "gmailUnreadImportantEmails",
            "gmailSender",
        ] {
            document.set_text(id, NO_DATA);
        }
        document.set_text("gmailSenderInitial", "-");
        return;
    };

    document.set_text("gmailUnreadEmailsDays", summary.unread_emails_days.to_string());
    document.set_text("gmailUnreadEmailsHours", summary.unread_emails_hours.to_string());
    document.set_text(
        "gmailUnreadImportantEmails",
        summary.unread_important_emails.to_string(),
    );

    match summary.sender.chars().next() {
        Some(initial) if summary.unread_emails_days != 0 => {
            document.set_text("gmailSender", summary.sender.clone());
            document.set_text("gmailSenderInitial", initial.to_uppercase().to_string());
        }
        _ => {
            document.set_text("gmailSender", "N/A");
            document.set_text("gmailSenderInitial", "-");
        }
    }
}

pub fn render_tasks(document: &mut Document, snapshot: &Snapshot<TaskSummary>) {
    let values = snapshot.data().map(|summary| {
        [
            summary.tasks_to_complete,
            summary.tasks_due_today,
            summary.tasks_completed_today,
            summary.tasks_overdue,
        ]
    });
    let ids = [
        "tasksToComplete",
        "tasksDueToday",
        "tasksCompletedToday",
        "tasksOverdue",
    ];
    for (index, id) in ids.into_iter().enumerate() {
        match values {
            Some(values) => document.set_text(id, values[index].to_string()),
            None => document.set_text(id, NO_DATA),
        }
    }
}

pub fn render_calendar(document: &mut Document, snapshot: &Snapshot<CalendarWeek>) {
    for index in 0..CALENDAR_DAYS {
        let day_id = format!("calendarDay{index}");
        let work_id = format!("calendarWork{index}");
        let personal_id = format!("calendarPersonal{index}");

        let Some(week) = snapshot.data() else {
            document.set_text(&day_id, NO_DATA);
            document.set_text(&work_id, NO_DATA);
            document.set_text(&personal_id, NO_DATA);
            continue;
        };

        document.set_text(&day_id, day_label(week.start_day, index));
        document.set_text(&work_id, free_time_text(week.work_hours_per_day.get(index)));
        document.set_text(
            &personal_id,
            free_time_text(week.personal_hours_per_day.get(index)),
        );
    }
}

fn free_time_text(ms: Option<&u64>) -> String {
    ms.map(|ms| convert_time(*ms))
        .unwrap_or_else(|| NO_DATA.to_string())
}

pub fn render_directions(document: &mut Document, directions: &DirectionsResult) {
    let blocks = directions
        .legs()
        .map(|leg| {
            format!(
                "Duration: {}\nDistance: {}\nStart: {}\nEnd: {}",
                leg.duration, leg.distance, leg.start_address, leg.end_address
            )
        })
        .collect::<Vec<_>>();

    let text = if blocks.is_empty() {
        NO_DATA.to_string()
    } else {
        blocks.join("\n\n")
    };
    document.set_text("directions-container", text);
}

pub fn render_plan_mail(document: &mut Document, plan: &PlanMail) {
    document.set_text("planMailWordCount", plan.word_count.to_string());
    document.set_text("planMailReadingSpeed", plan.average_reading_speed.to_string());
    document.set_text("planMailMinutesToRead", plan.minutes_to_read.to_string());

    let times = plan
        .potential_meeting_times
        .iter()
        .map(|time| format!("{} - {}", time.key, time.value))
        .collect::<Vec<_>>();
    let text = if times.is_empty() {
        NO_DATA.to_string()
    } else {
        times.join("\n")
    };
    document.set_text("planMailMeetingTimes", text);
}

/// Remaining count and head of the assign queue
pub fn render_assign_queue<'a>(
    document: &mut Document,
    queue: impl ExactSizeIterator<Item = &'a ActionableMessage>,
) {
    let mut queue = queue;
    document.set_text("assignSuspectedActionItems", queue.len().to_string());
    let current = queue
        .next()
        .map(|message| message.headline().to_string())
        .unwrap_or_else(|| NO_DATA.to_string());
    document.set_text("assignCurrentSubject", current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayboard_adapter::{Leg, MeetingTime, Route};
    use rstest::rstest;

    #[rstest]
    #[case(5_400_000, "1h 30m free")]
    #[case(0, "0h 0m free")]
    #[case(59_999, "0h 0m free")]
    #[case(28_800_000, "8h 0m free")]
    #[case(3_660_000 + 59_999, "1h 1m free")]
    fn test_convert_time(#[case] ms: u64, #[case] expected: &str) {
        assert_eq!(convert_time(ms), expected);
    }

    fn week(start_day: u8) -> CalendarWeek {
        CalendarWeek {
            start_day,
            work_hours_per_day: vec![28_800_000, 5_400_000, 0, 3_600_000, 60_000],
            personal_hours_per_day: vec![57_600_000; 5],
        }
    }

    #[test]
    fn test_calendar_day_labels_wrap_the_week() {
        for start_day in 0..7u8 {
            let mut document = Document::new();
            render_calendar(&mut document, &Snapshot::Data(week(start_day)));
            for index in 0..CALENDAR_DAYS {
                let expected = DAYS[(start_day as usize + index) % 7];
                assert_eq!(document.text(&format!("calendarDay{index}")), expected);
            }
        }
    }

    #[test]
    fn test_calendar_free_time() {
        let mut document = Document::new();
        render_calendar(&mut document, &Snapshot::Data(week(6)));
        assert_eq!(document.text("calendarDay0"), "Saturday");
        assert_eq!(document.text("calendarDay1"), "Sunday");
        assert_eq!(document.text("calendarWork1"), "1h 30m free");
        assert_eq!(document.text("calendarWork2"), "0h 0m free");
        assert_eq!(document.text("calendarPersonal4"), "16h 0m free");
    }

    #[test]
    fn test_calendar_short_arrays_use_placeholder() {
        let mut document = Document::new();
        let short = CalendarWeek {
            start_day: 1,
            work_hours_per_day: vec![3_600_000],
            personal_hours_per_day: Vec::new(),
        };
        render_calendar(&mut document, &Snapshot::Data(short));
        assert_eq!(document.text("calendarWork0"), "1h 0m free");
        assert_eq!(document.text("calendarWork1"), NO_DATA);
        assert_eq!(document.text("calendarPersonal0"), NO_DATA);
    }

    #[test]
    fn test_empty_payloads_render_placeholder() {
        let mut document = Document::new();
        render_gmail(&mut document, &Snapshot::NoData);
        render_tasks(&mut document, &Snapshot::NoData);
        render_calendar(&mut document, &Snapshot::NoData);

        assert_eq!(document.text("gmailUnreadEmailsDays"), NO_DATA);
        assert_eq!(document.text("gmailSenderInitial"), "-");
        assert_eq!(document.text("tasksOverdue"), NO_DATA);
        assert_eq!(document.text("calendarDay0"), NO_DATA);
        assert_eq!(document.text("calendarPersonal4"), NO_DATA);
    }

    fn gmail(unread_days: u32, sender: &str) -> Snapshot<GmailSummary> {
        Snapshot::Data(GmailSummary {
            n_days: None,
            m_hours: None,
            unread_emails_days: unread_days,
            unread_emails_hours: 1,
            unread_important_emails: 2,
            sender: sender.to_string(),
        })
    }

    #[test]
    fn test_gmail_sender_and_initial() {
        let mut document = Document::new();
        render_gmail(&mut document, &gmail(4, "ada@example.com"));
        assert_eq!(document.text("gmailUnreadEmailsDays"), "4");
        assert_eq!(document.text("gmailSender"), "ada@example.com");
        assert_eq!(document.text("gmailSenderInitial"), "A");
    }

    #[test]
    fn test_gmail_without_unread_hides_sender() {
        let mut document = Document::new();
        render_gmail(&mut document, &gmail(0, "ada@example.com"));
        assert_eq!(document.text("gmailSender"), "N/A");
        assert_eq!(document.text("gmailSenderInitial"), "-");

        render_gmail(&mut document, &gmail(3, ""));
        assert_eq!(document.text("gmailSender"), "N/A");
    }

    #[test]
    fn test_tasks() {
        let mut document = Document::new();
        render_tasks(
            &mut document,
            &Snapshot::Data(TaskSummary {
                task_list_titles: Vec::new(),
                tasks_to_complete: 9,
                tasks_due_today: 2,
                tasks_completed_today: 1,
                tasks_overdue: 0,
            }),
        );
        assert_eq!(document.text("tasksToComplete"), "9");
        assert_eq!(document.text("tasksOverdue"), "0");
    }

    #[test]
    fn test_directions_blocks() {
        let mut document = Document::new();
        let leg = |start: &str, end: &str| Leg {
            duration: "10 mins".to_string(),
            distance: "2 km".to_string(),
            start_address: start.to_string(),
            end_address: end.to_string(),
        };
        let directions = DirectionsResult {
            routes: vec![Route {
                legs: vec![leg("A", "B"), leg("B", "C")],
            }],
        };
        render_directions(&mut document, &directions);
        assert_eq!(
            document.text("directions-container"),
            "Duration: 10 mins\nDistance: 2 km\nStart: A\nEnd: B\n\n\
             Duration: 10 mins\nDistance: 2 km\nStart: B\nEnd: C"
        );

        render_directions(&mut document, &DirectionsResult { routes: Vec::new() });
        assert_eq!(document.text("directions-container"), NO_DATA);
    }

    #[test]
    fn test_plan_mail() {
        let mut document = Document::new();
        let mut plan = PlanMail {
            word_count: 120,
            average_reading_speed: 50,
            minutes_to_read: 3,
            potential_meeting_times: vec![MeetingTime {
                key: "Tue 10:00".to_string(),
                value: "Tue 10:03".to_string(),
            }],
        };
        render_plan_mail(&mut document, &plan);
        assert_eq!(document.text("planMailMinutesToRead"), "3");
        assert_eq!(document.text("planMailMeetingTimes"), "Tue 10:00 - Tue 10:03");

        plan.potential_meeting_times.clear();
        render_plan_mail(&mut document, &plan);
        assert_eq!(document.text("planMailMeetingTimes"), NO_DATA);
    }

    #[test]
    fn test_last_render_wins() {
        let mut document = Document::new();
        render_tasks(
            &mut document,
            &Snapshot::Data(TaskSummary {
                task_list_titles: Vec::new(),
                tasks_to_complete: 1,
                tasks_due_today: 1,
                tasks_completed_today: 1,
                tasks_overdue: 1,
            }),
        );
        render_tasks(&mut document, &Snapshot::NoData);
        assert_eq!(document.text("tasksToComplete"), NO_DATA);
    }
}
