#![cfg(test)]

use crate::help::error::{HelpError, Result};
use crate::help::page::{paginate, total_pages, HelpGroup, HelpPage};

fn numbered(title: &str, count: usize) -> HelpGroup {
    HelpGroup::new(title, (1..=count).map(|i| format!("line {}", i)).collect())
}

#[test]
fn test_total_pages() -> Result<()> {
    assert_eq!(total_pages(&[numbered("a", 12)], 5)?, 3);
    assert_eq!(total_pages(&[numbered("a", 5)], 5)?, 1);
    assert_eq!(total_pages(&[numbered("a", 6), numbered("b", 1)], 5)?, 3);
    assert_eq!(total_pages(&[numbered("a", 0), numbered("b", 3)], 5)?, 1);
    assert_eq!(total_pages(&[], 5)?, 0);
    Ok(())
}

#[test]
fn test_zero_capacity_is_rejected() {
    assert_eq!(paginate(&[numbered("a", 3)], 1, 0), Err(HelpError::ZeroCapacity));
    assert_eq!(total_pages(&[], 0), Err(HelpError::ZeroCapacity));
}

#[test]
fn test_pages_within_one_group() -> Result<()> {
    let groups = [numbered("cmd", 12)];
    let first = paginate(&groups, 1, 5)?;
    assert_eq!(
        first,
        Some(HelpPage {
            title: "cmd".to_string(),
            lines: (1..=5).map(|i| format!("line {}", i)).collect(),
            page: 1,
            total_pages: 3,
        })
    );
    let last = paginate(&groups, 3, 5)?.map(|page| page.lines);
    assert_eq!(last, Some(vec!["line 11".to_string(), "line 12".to_string()]));
    Ok(())
}

#[test]
fn test_requested_page_is_clamped() -> Result<()> {
    let groups = [numbered("cmd", 12)];
    let past_end = paginate(&groups, 5, 5)?.map(|page| (page.page, page.lines));
    assert_eq!(
        past_end,
        Some((3, vec!["line 11".to_string(), "line 12".to_string()]))
    );
    assert_eq!(paginate(&groups, 0, 5)?.map(|page| page.page), Some(1));
    assert_eq!(paginate(&groups, -7, 5)?.map(|page| page.page), Some(1));
    Ok(())
}

#[test]
fn test_pages_span_groups() -> Result<()> {
    let groups = [numbered("first", 6), numbered("empty", 0), numbered("second", 2)];
    let second = paginate(&groups, 2, 5)?;
    assert_eq!(second.as_ref().map(|page| page.title.as_str()), Some("first"));
    assert_eq!(second.map(|page| page.lines), Some(vec!["line 6".to_string()]));

    let third = paginate(&groups, 3, 5)?;
    assert_eq!(third.as_ref().map(|page| page.title.as_str()), Some("second"));
    assert_eq!(third.map(|page| page.total_pages), Some(3));
    Ok(())
}

#[test]
fn test_no_lines_gives_no_page() -> Result<()> {
    assert_eq!(paginate(&[], 1, 5)?, None);
    assert_eq!(paginate(&[numbered("empty", 0)], 1, 5)?, None);
    Ok(())
}
