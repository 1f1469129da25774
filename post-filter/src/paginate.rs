/// 返回前 `page_size * page` 个元素（不足时返回全部）
///
/// 每次都从第1页开始重新计算，页码小于1按1处理。
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let end = page_size.saturating_mul(page.max(1)).min(items.len());
    &items[..end]
}

/// 是否还有更多内容：可见数量严格小于筛选结果总数
pub fn has_more(visible: usize, total: usize) -> bool {
    visible < total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_grows_by_page_size() {
        let items: Vec<u32> = (0..14).collect();
        assert_eq!(paginate(&items, 6, 1), &items[..6]);
        assert_eq!(paginate(&items, 6, 2), &items[..12]);
        assert_eq!(paginate(&items, 6, 3), &items[..]);
        assert_eq!(paginate(&items, 6, 10), &items[..]);
    }

    #[test]
    fn test_page_is_prefix_of_next() {
        let items: Vec<u32> = (0..23).collect();
        for size in 1..5 {
            for page in 1..10 {
                let current = paginate(&items, size, page);
                let next = paginate(&items, size, page + 1);
                assert!(next.starts_with(current));
                assert_eq!(paginate(&items, size, page), current);
            }
        }
    }

    #[test]
    fn test_zero_page_treated_as_first() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 2, 0), &[1, 2]);
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, usize::MAX, 2), &items[..]);
    }

    #[test]
    fn test_has_more() {
        assert!(has_more(6, 7));
        assert!(!has_more(7, 7));
        assert!(!has_more(0, 0));
    }
}
