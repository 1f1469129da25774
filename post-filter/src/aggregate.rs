use blog_common::Post;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// 按名称去重后的分类
///
/// `id` 与 `name` 相同，不使用任何原始分类ID，这样按ID筛选与按名称筛选等价。
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedCategory {
    /// 展示用标识，等于 `name`
    pub id: String,
    /// 分类名称（去重键）
    pub name: String,
    /// 合并到该名称下的原始分类ID（首次出现顺序，无重复）
    pub original_ids: Vec<String>,
    /// 该名称在所有文章中出现的次数
    pub count: usize,
}

impl AggregatedCategory {
    fn first_sighting(name: &str, id: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            original_ids: vec![id.to_string()],
            count: 1,
        }
    }

    fn record(&mut self, id: &str) {
        self.count += 1;
        if !self.original_ids.iter().any(|existing| existing == id) {
            self.original_ids.push(id.to_string());
        }
    }
}

/// 从全部文章中统计分类，结果按名称排序
pub fn aggregate_categories(posts: &[Post]) -> Vec<AggregatedCategory> {
    let mut by_name: HashMap<&str, AggregatedCategory> = HashMap::new();

    for post in posts {
        for category in &post.categories {
            by_name
                .entry(category.name.as_str())
                .and_modify(|agg| agg.record(&category.id))
                .or_insert_with(|| {
                    AggregatedCategory::first_sighting(&category.name, &category.id)
                });
        }
    }

    let mut categories: Vec<AggregatedCategory> = by_name.into_values().collect();
    categories.sort_by(|a, b| compare_names(&a.name, &b.name));
    categories
}

/// 名称比较：先忽略大小写比较，相同时小写在前，最后按原始字节比较
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
