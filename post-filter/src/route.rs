use serde::Serialize;

/// 列表视图路径
pub const LIST_PATH: &str = "/";

const POST_PREFIX: &str = "/post/";

/// 页面路由
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Route {
    /// 文章列表 `/`
    List,
    /// 文章详情 `/post/{id}`
    Post { id: String },
    /// 其他路径
    NotFound,
}

impl Route {
    /// 解析路径，忽略查询字符串、锚点和末尾的 `/`
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Route::List;
        }

        match trimmed.strip_prefix(POST_PREFIX) {
            Some(raw_id) if !raw_id.is_empty() && !raw_id.contains('/') => {
                let id = urlencoding::decode(raw_id)
                    .map(|id| id.into_owned())
                    .unwrap_or_else(|_| raw_id.to_string());
                Route::Post { id }
            }
            _ => Route::NotFound,
        }
    }
}
