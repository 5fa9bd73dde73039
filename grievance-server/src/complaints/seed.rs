//! Startup complaints

use chrono::NaiveDate;
use shared::models::{Complaint, ComplaintStatus};

pub(crate) fn seed_complaints() -> Vec<Complaint> {
    [
        ("Noise complaint", ComplaintStatus::Submitted, (2026, 9, 2)),
        ("Pothole on Main Road", ComplaintStatus::Assigned, (2026, 9, 14)),
        ("Streetlight not working", ComplaintStatus::Resolved, (2026, 9, 21)),
        ("Garbage not collected", ComplaintStatus::Forwarded, (2026, 10, 3)),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, status, (y, m, d)), id)| Complaint {
        id,
        title: title.to_string(),
        status,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        description: None,
    })
    .collect()
}
