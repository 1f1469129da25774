use blog_common::BlogError;
use serde::{Deserialize, Serialize};

/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// 默认的URL查询参数名
pub const DEFAULT_QUERY_PARAM: &str = "categories";

/// 列表视图配置 - 由页面脚本或命令行传入
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// 每次"加载更多"展示的文章数
    pub page_size: usize,
    /// 保存已选分类的查询参数名
    pub query_param: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            query_param: DEFAULT_QUERY_PARAM.to_string(),
        }
    }
}

impl ViewConfig {
    /// 校验配置，不合法时返回 `BlogError::Config`
    pub fn validate(self) -> Result<Self, BlogError> {
        if self.page_size == 0 {
            return Err(BlogError::Config("每页条数必须大于0".to_string()));
        }
        if self.query_param.trim().is_empty() {
            return Err(BlogError::Config("查询参数名不能为空".to_string()));
        }
        Ok(self)
    }
}
