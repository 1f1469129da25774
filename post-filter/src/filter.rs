use blog_common::Post;

use crate::selection::Selection;

/// 按已选分类名称筛选文章，保持原有顺序
///
/// 未选任何分类时返回全部文章；否则文章的任一分类名称被选中即保留（OR）。
pub fn filter_posts<'a>(posts: &'a [Post], selection: &Selection) -> Vec<&'a Post> {
    posts.iter().filter(|post| matches(post, selection)).collect()
}

/// 符合筛选条件的文章总数，直接基于全部文章计算
pub fn count_matching(posts: &[Post], selection: &Selection) -> usize {
    posts.iter().filter(|post| matches(post, selection)).count()
}

fn matches(post: &Post, selection: &Selection) -> bool {
    selection.is_empty() || post.categories.iter().any(|c| selection.contains(&c.name))
}
