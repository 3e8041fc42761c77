//! 分页
//!
//! 页码从 1 开始，每页固定 [`QUESTIONS_PER_PAGE`] 条。
//! 页码 ≤ 0 时偏移量 `(page - 1) * 10` 为负，不对应任何元素，结果为空页；
//! 不会被修正为第 1 页，也不会从末尾倒数取值。

/// 每页题目数量
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 解析查询参数中的页码
///
/// 缺失或不是整数时为第 1 页。
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(1)
}

/// 取第 `page` 页
///
/// 越界时返回空切片，不视为错误。
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
