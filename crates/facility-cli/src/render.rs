// Plain-text rendering of console state

use std::fmt::Write;

use facility_api::{DocumentDetail, DocumentSummary, NoticeDetail, NoticeSummary, UserInfo};
use facility_console::{ListState, PaginationView};

const TITLE_WIDTH: usize = 40;

/// Cut `text` to `width` characters, marking the cut with `~`
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('~');
    clipped
}

pub fn user_line(user: &UserInfo) -> String {
    match &user.unit {
        Some(unit) => format!("{} ({}) - {} - {}", user.name, user.username, user.role, unit.name),
        None => format!("{} ({}) - {}", user.name, user.username, user.role),
    }
}

pub fn pagination_line(view: &PaginationView, total_count: u64) -> String {
    if !view.visible() {
        return format!("{} total", total_count);
    }
    let pages: Vec<String> = view
        .page_numbers()
        .map(|page| {
            if view.is_current(page) {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect();
    let previous = if view.has_previous { "<" } else { " " };
    let next = if view.has_next { ">" } else { " " };
    format!("{} {} {}  ({} total)", previous, pages.join(" "), next, total_count)
}

pub fn notice_table(state: &ListState<NoticeSummary>) -> String {
    if state.items.is_empty() {
        return "No notices.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:<40}  {:<12}  {}", "ID", "TITLE", "AUTHOR", "DATE");
    for notice in &state.items {
        let _ = writeln!(
            out,
            "{:>6}  {:<40}  {:<12}  {}",
            notice.id,
            clip(&notice.title, TITLE_WIDTH),
            clip(&notice.author_name, 12),
            notice.formatted_date
        );
    }
    out
}

pub fn document_table(state: &ListState<DocumentSummary>) -> String {
    if state.items.is_empty() {
        return "No documents.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6}  {:<40}  {:<24}  {:>10}  {:<12}  {}",
        "ID", "TITLE", "FILE", "SIZE", "UPLOADER", "DATE"
    );
    for document in &state.items {
        let _ = writeln!(
            out,
            "{:>6}  {:<40}  {:<24}  {:>10}  {:<12}  {}",
            document.id,
            clip(&document.title, TITLE_WIDTH),
            clip(&document.file_name, 24),
            document.formatted_file_size,
            clip(&document.uploader_name, 12),
            document.formatted_date
        );
    }
    out
}

pub fn notice_detail(notice: &NoticeDetail) -> String {
    format!(
        "#{} {}\n{} ({}) - {}\n\n{}\n",
        notice.id,
        notice.title,
        notice.author_name,
        notice.author_username,
        notice.formatted_date,
        notice.content
    )
}

pub fn document_detail(document: &DocumentDetail) -> String {
    let mut out = format!(
        "#{} {}\nFile: {} ({}, {})\nUploaded by {} ({}) - {}\n",
        document.id,
        document.title,
        document.file_name,
        document.file_type,
        document.formatted_file_size,
        document.uploader_name,
        document.uploader_username,
        document.formatted_date
    );
    if let Some(description) = document.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(out, "\n{}\n", description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use facility_api::{UnitInfo, UserRole};

    fn notice(id: u64, title: &str) -> NoticeSummary {
        NoticeSummary {
            id,
            title: title.to_string(),
            author_name: "Kim".to_string(),
            created_at: None,
            formatted_date: "2024.03.02".to_string(),
        }
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("abcdefghij", 5), "abcd~");
        assert_eq!(clip("시설관리체계", 3), "시설~");
    }

    #[test]
    fn test_notice_table_rows() {
        let mut state = ListState::initial();
        state.items = vec![notice(7, "Elevator maintenance"), notice(6, &"x".repeat(60))];

        let table = notice_table(&state);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("TITLE"));
        assert!(lines[1].contains("Elevator maintenance"));
        assert!(lines[2].contains(&format!("{}~", "x".repeat(39))));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(notice_table(&ListState::initial()), "No notices.\n");
        assert_eq!(document_table(&ListState::initial()), "No documents.\n");
    }

    #[test]
    fn test_pagination_line() {
        let view = PaginationView {
            display_page: 2,
            total_pages: 3,
            has_next: true,
            has_previous: true,
        };
        assert_eq!(pagination_line(&view, 12), "< 1 [2] 3 >  (12 total)");

        let single = PaginationView {
            display_page: 1,
            total_pages: 1,
            has_next: false,
            has_previous: false,
        };
        assert_eq!(pagination_line(&single, 2), "2 total");
    }

    #[test]
    fn test_user_line() {
        let mut user = UserInfo {
            id: 1,
            username: "21-70001".to_string(),
            name: "Kim".to_string(),
            role: UserRole::Manager,
            unit: None,
        };
        assert_eq!(user_line(&user), "Kim (21-70001) - MANAGER");

        user.unit = Some(UnitInfo {
            id: 3,
            name: "Facilities".to_string(),
            code: "FAC".to_string(),
        });
        assert_eq!(user_line(&user), "Kim (21-70001) - MANAGER - Facilities");
    }

    #[test]
    fn test_notice_detail() {
        let detail = NoticeDetail {
            id: 13,
            title: "Boiler inspection".to_string(),
            content: "Monday 9am".to_string(),
            author_name: "Kim".to_string(),
            author_username: "21-70001".to_string(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 3, 4)
                .and_then(|d| d.and_hms_opt(9, 0, 0)),
            formatted_date: "2024.03.04".to_string(),
        };
        let text = notice_detail(&detail);
        assert!(text.starts_with("#13 Boiler inspection\n"));
        assert!(text.ends_with("Monday 9am\n"));
    }
}
