use wasm_bindgen::prelude::*;

// 导出模块
pub mod aggregate;
pub mod config;
pub mod filter;
pub mod logger;
pub mod paginate;
pub mod query;
pub mod route;
pub mod selection;
pub mod store;
pub mod view;

pub use aggregate::{aggregate_categories, AggregatedCategory};
pub use config::ViewConfig;
pub use filter::{count_matching, filter_posts};
pub use paginate::{has_more, paginate};
pub use route::Route;
pub use selection::Selection;
pub use store::{reduce, Action, BlogState, BlogStore, Effect, FetchStatus};
pub use view::{derive_view, find_post, PostDetail, PostListView};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// 初始化函数 - 设置错误处理和控制台日志
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// 版本信息
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// 解析页面路径
#[wasm_bindgen]
pub fn resolve_route(path: &str) -> Result<JsValue, JsValue> {
    to_js(&Route::resolve(path), "路由")
}

// 以普通JS对象输出（而不是Map），页面可以直接按字段访问
fn to_js<T: serde::Serialize>(value: &T, what: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("序列化{}失败: {}", what, e)))
}

/// 博客列表JS接口 - 页面脚本负责请求和渲染，状态都保存在这里
#[wasm_bindgen]
pub struct BlogStoreJS {
    store: BlogStore,
}

#[wasm_bindgen]
impl BlogStoreJS {
    /// 创建状态容器
    ///
    /// `search` 为 `location.search`，`config` 可省略。
    #[wasm_bindgen(constructor)]
    pub fn new(search: &str, config: JsValue) -> Result<BlogStoreJS, JsValue> {
        let config: ViewConfig = if config.is_undefined() || config.is_null() {
            ViewConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("解析配置失败: {}", e)))?
        };

        let store = BlogStore::new(search, config).map_err(|e| {
            log::error!("初始化状态失败: {}", e);
            JsValue::from_str(&e.to_string())
        })?;

        Ok(BlogStoreJS { store })
    }

    /// 开始请求文章列表，返回请求编号
    #[wasm_bindgen]
    pub fn begin_fetch(&mut self) -> u32 {
        self.store.begin_fetch()
    }

    /// 提交接口返回的文本；返回结果是否被采用
    #[wasm_bindgen]
    pub fn receive_posts(&mut self, ticket: u32, payload: &str) -> bool {
        self.store.receive_payload(ticket, payload) != Effect::Ignored
    }

    /// 请求失败
    #[wasm_bindgen]
    pub fn fetch_failed(&mut self, ticket: u32, message: &str) {
        self.store.fail_fetch(ticket, message);
    }

    /// 切换分类，返回新的查询字符串
    #[wasm_bindgen]
    pub fn toggle_category(&mut self, name: &str) -> String {
        self.store.toggle(name).to_string()
    }

    /// 清空已选分类，返回新的查询字符串
    #[wasm_bindgen]
    pub fn clear_categories(&mut self) -> String {
        self.store.clear().to_string()
    }

    #[wasm_bindgen]
    pub fn load_more(&mut self) {
        self.store.load_more();
    }

    /// 直接加载到第 `page` 页，超出范围时停在最后一页
    #[wasm_bindgen]
    pub fn load_until(&mut self, page: usize) {
        self.store.load_until(page);
    }

    #[wasm_bindgen]
    pub fn is_loading(&self) -> bool {
        self.store.state().is_loading()
    }

    #[wasm_bindgen]
    pub fn search(&self) -> String {
        self.store.search().to_string()
    }

    #[wasm_bindgen]
    pub fn selected_categories(&self) -> Result<JsValue, JsValue> {
        to_js(self.store.selection(), "已选分类")
    }

    /// 获取聚合后的分类
    #[wasm_bindgen]
    pub fn categories(&self) -> Result<JsValue, JsValue> {
        to_js(&self.store.categories(), "分类")
    }

    /// 获取当前列表视图
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&ListViewJS::from(&self.store), "列表视图")
    }

    /// 获取文章详情
    #[wasm_bindgen]
    pub fn post_detail(&self, id: &str) -> Result<JsValue, JsValue> {
        to_js(&self.store.detail(id), "文章详情")
    }
}

#[derive(serde::Serialize)]
struct ListViewJS<'a> {
    #[serde(flatten)]
    view: PostListView<'a>,
    loading: bool,
    fetch: &'a FetchStatus,
}

impl<'a> From<&'a BlogStore> for ListViewJS<'a> {
    fn from(store: &'a BlogStore) -> Self {
        Self {
            view: store.view(),
            loading: store.state().is_loading(),
            fetch: &store.state().fetch,
        }
    }
}
