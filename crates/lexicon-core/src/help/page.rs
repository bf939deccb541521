use crate::help::error::{HelpError, Result};

/// Lines listed under a shared title, such as the usage lines of one command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HelpGroup {
    pub title: String,
    pub lines: Vec<String>,
}

impl HelpGroup {
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Pages this group fills at `capacity` lines per page
    fn pages(&self, capacity: usize) -> usize {
        self.lines.len().div_ceil(capacity)
    }
}

/// One page cut from a sequence of groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpPage {
    pub title: String,
    pub lines: Vec<String>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
}

/// Pages needed for `groups` at `capacity` lines per page. Groups never share
/// a page, and an empty group takes none.
pub fn total_pages(groups: &[HelpGroup], capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(HelpError::ZeroCapacity);
    }
    Ok(groups.iter().map(|group| group.pages(capacity)).sum())
}

/// Cut page `requested` out of `groups`.
///
/// The request is clamped to the available pages, so asking for page 0 gives
/// the first page and asking past the end gives the last. Returns `None` when
/// there are no lines at all.
pub fn paginate(groups: &[HelpGroup], requested: i64, capacity: usize) -> Result<Option<HelpPage>> {
    let total = total_pages(groups, capacity)?;
    if total == 0 {
        return Ok(None);
    }
    let target = usize::try_from(requested).unwrap_or(0).clamp(1, total);

    let mut first = 1;
    for group in groups {
        let pages = group.pages(capacity);
        if target < first + pages {
            let start = (target - first) * capacity;
            let end = (start + capacity).min(group.lines.len());
            return Ok(Some(HelpPage {
                title: group.title.clone(),
                lines: group.lines[start..end].to_vec(),
                page: target,
                total_pages: total,
            }));
        }
        first += pages;
    }
    Ok(None)
}
