use blog_common::Post;
use serde::Serialize;

use crate::filter::{count_matching, filter_posts};
use crate::paginate::{has_more, paginate};
use crate::route::LIST_PATH;
use crate::selection::Selection;

/// 列表视图数据 - 交给页面渲染
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostListView<'a> {
    /// 当前可见的文章
    pub posts: Vec<&'a Post>,
    /// 符合筛选条件的文章总数
    pub total: usize,
    /// 当前页码
    pub page: usize,
    /// 是否显示"加载更多"
    pub has_more: bool,
}

/// 由文章、已选分类和页码推导列表视图，纯函数
pub fn derive_view<'a>(
    posts: &'a [Post],
    selection: &Selection,
    page: usize,
    page_size: usize,
) -> PostListView<'a> {
    let filtered = filter_posts(posts, selection);
    let visible = paginate(&filtered, page_size, page).to_vec();
    let total = count_matching(posts, selection);

    PostListView {
        has_more: has_more(visible.len(), total),
        posts: visible,
        total,
        page: page.max(1),
    }
}

/// 详情视图状态
#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum PostDetail<'a> {
    /// 文章列表仍在加载
    Loading,
    Found {
        post: &'a Post,
        #[serde(rename = "backTo")]
        back_to: &'static str,
    },
    /// 未找到对应文章，提供返回列表的路径
    NotFound {
        id: String,
        #[serde(rename = "backTo")]
        back_to: &'static str,
    },
}

/// 在已获取的文章中查找详情
///
/// 找不到时，若仍在加载则为 `Loading`，否则为 `NotFound`。
pub fn find_post<'a>(posts: &'a [Post], id: &str, loading: bool) -> PostDetail<'a> {
    match posts.iter().find(|post| post.id == id) {
        Some(post) => PostDetail::Found {
            post,
            back_to: LIST_PATH,
        },
        None if loading => PostDetail::Loading,
        None => PostDetail::NotFound {
            id: id.to_string(),
            back_to: LIST_PATH,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_common::{Author, Category};
    use chrono::{TimeZone, Utc};

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| Post {
                id: i.to_string(),
                title: format!("Post {}", i),
                publish_date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
                author: Author {
                    name: "Ada".to_string(),
                    avatar: String::new(),
                },
                summary: String::new(),
                categories: vec![Category {
                    id: format!("c{}", i),
                    name: if i % 2 == 0 { "Even" } else { "Odd" }.to_string(),
                }],
            })
            .collect()
    }

    #[test]
    fn test_unfiltered_first_page() {
        let posts = posts(10);
        let view = derive_view(&posts, &Selection::new(), 1, 6);
        assert_eq!(view.posts.len(), 6);
        assert_eq!(view.total, 10);
        assert!(view.has_more);
    }

    #[test]
    fn test_filtered_window_and_total() {
        let posts = posts(10);
        let selection = Selection::from_param("Odd");
        let view = derive_view(&posts, &selection, 1, 3);
        let ids: Vec<&str> = view.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
        assert_eq!(view.total, 5);
        assert!(view.has_more);

        let view = derive_view(&posts, &selection, 2, 3);
        assert_eq!(view.posts.len(), 5);
        assert!(!view.has_more);
    }

    #[test]
    fn test_has_more_false_exactly_when_all_visible() {
        let posts = posts(9);
        for page in 1..5 {
            let view = derive_view(&posts, &Selection::new(), page, 2);
            assert_eq!(view.has_more, view.posts.len() != view.total);
        }
    }

    #[test]
    fn test_empty_collection() {
        let view = derive_view(&[], &Selection::from_param("Odd"), 1, 6);
        assert!(view.posts.is_empty());
        assert_eq!(view.total, 0);
        assert!(!view.has_more);
    }

    #[test]
    fn test_find_post_states() {
        let posts = posts(2);
        assert!(matches!(find_post(&posts, "1", false), PostDetail::Found { post, .. } if post.id == "1"));
        assert_eq!(find_post(&posts, "9", true), PostDetail::Loading);
        assert_eq!(
            find_post(&posts, "9", false),
            PostDetail::NotFound {
                id: "9".to_string(),
                back_to: "/"
            }
        );
    }

    #[test]
    fn test_detail_serializes_with_state_tag() {
        let value = serde_json::to_value(find_post(&[], "x", false)).unwrap();
        assert_eq!(value["state"], "notFound");
        assert_eq!(value["backTo"], "/");
        let value = serde_json::to_value(find_post(&[], "x", true)).unwrap();
        assert_eq!(value["state"], "loading");
    }
}
