use blog_common::{parse_posts, BlogError, Post};
use serde::Serialize;

use crate::aggregate::{aggregate_categories, AggregatedCategory};
use crate::config::ViewConfig;
use crate::filter::count_matching;
use crate::query;
use crate::selection::Selection;
use crate::view::{derive_view, find_post, PostDetail, PostListView};

/// 文章列表的获取状态
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum FetchStatus {
    Idle,
    Loading,
    Loaded,
    /// 获取或解析失败，文章列表为空
    Failed(String),
}

/// 列表页的全部状态
#[derive(Debug, Clone)]
pub struct BlogState {
    pub posts: Vec<Post>,
    /// 每次成功获取后整体重建
    pub categories: Vec<AggregatedCategory>,
    pub selection: Selection,
    /// 当前页码，从1开始
    pub page: usize,
    pub fetch: FetchStatus,
    /// 最近一次发起请求的编号
    pub ticket: u32,
}

impl Default for BlogState {
    fn default() -> Self {
        Self::new(Selection::new())
    }
}

impl BlogState {
    pub fn new(selection: Selection) -> Self {
        Self {
            posts: Vec::new(),
            categories: Vec::new(),
            selection,
            page: 1,
            fetch: FetchStatus::Idle,
            ticket: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetch == FetchStatus::Loading
    }
}

/// 状态变更动作
#[derive(Debug, Clone)]
pub enum Action {
    FetchStarted,
    FetchSucceeded { ticket: u32, posts: Vec<Post> },
    FetchFailed { ticket: u32, message: String },
    Toggle(String),
    Clear,
    LoadMore,
    /// 直接跳到指定页，小于1按1处理
    LoadPage(usize),
}

/// 动作产生的副作用，由调用方执行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// 已选分类变化，需要同步URL查询参数
    SyncQuery,
    /// 过期请求的结果，已忽略
    Ignored,
}

/// 纯状态转换函数
pub fn reduce(mut state: BlogState, action: Action) -> (BlogState, Effect) {
    let effect = match action {
        Action::FetchStarted => {
            state.ticket = state.ticket.wrapping_add(1);
            state.fetch = FetchStatus::Loading;
            Effect::None
        }
        Action::FetchSucceeded { ticket, .. } | Action::FetchFailed { ticket, .. }
            if ticket != state.ticket =>
        {
            Effect::Ignored
        }
        Action::FetchSucceeded { posts, .. } => {
            state.categories = aggregate_categories(&posts);
            state.posts = posts;
            state.fetch = FetchStatus::Loaded;
            Effect::None
        }
        Action::FetchFailed { message, .. } => {
            state.posts.clear();
            state.categories.clear();
            state.fetch = FetchStatus::Failed(message);
            Effect::None
        }
        Action::Toggle(name) => {
            state.selection.toggle(&name);
            state.page = 1;
            Effect::SyncQuery
        }
        Action::Clear => {
            state.selection.clear();
            state.page = 1;
            Effect::SyncQuery
        }
        Action::LoadMore => {
            state.page = state.page.saturating_add(1);
            Effect::None
        }
        Action::LoadPage(page) => {
            state.page = page.max(1);
            Effect::None
        }
    };
    (state, effect)
}

/// 状态容器 - 持有状态、配置和当前的查询字符串
#[derive(Debug)]
pub struct BlogStore {
    state: BlogState,
    config: ViewConfig,
    search: String,
    /// 启动时读取的已选分类及其原始参数值
    seed: Option<(Selection, String)>,
}

impl BlogStore {
    /// 创建状态容器，已选分类只在这里从查询字符串读取一次
    pub fn new(search: &str, config: ViewConfig) -> Result<Self, BlogError> {
        let config = config.validate()?;
        let seed = query::read_raw_param(search, &config.query_param).map(|raw| {
            let value = query::read_param(search, &config.query_param).unwrap_or_default();
            (Selection::from_param(&value), raw.to_string())
        });
        let selection = seed
            .as_ref()
            .map(|(selection, _)| selection.clone())
            .unwrap_or_default();

        log::debug!("初始已选分类: {:?}", selection);

        Ok(Self {
            state: BlogState::new(selection),
            config,
            search: search.to_string(),
            seed,
        })
    }

    /// 执行动作；需要时重写查询字符串
    pub fn dispatch(&mut self, action: Action) -> Effect {
        let state = std::mem::take(&mut self.state);
        let (state, effect) = reduce(state, action);
        self.state = state;

        match effect {
            Effect::SyncQuery => {
                let value = self.query_value();
                self.search =
                    query::write_param(&self.search, &self.config.query_param, value.as_deref());
            }
            Effect::Ignored => log::warn!("忽略过期的文章请求结果"),
            Effect::None => {}
        }
        effect
    }

    // 选择回到启动时的集合时写回原始参数值，否则写规范形式
    fn query_value(&self) -> Option<String> {
        match &self.seed {
            Some((seeded, raw)) if !seeded.is_empty() && *seeded == self.state.selection => {
                Some(raw.clone())
            }
            _ => self.state.selection.to_param(),
        }
    }

    /// 开始获取文章，返回本次请求编号
    pub fn begin_fetch(&mut self) -> u32 {
        self.dispatch(Action::FetchStarted);
        self.state.ticket
    }

    /// 接收接口返回的JSON；解析失败按获取失败处理
    pub fn receive_payload(&mut self, ticket: u32, json: &str) -> Effect {
        match parse_posts(json) {
            Ok(posts) => self.receive_posts(ticket, posts),
            Err(e) => self.fail_fetch(ticket, &e.to_string()),
        }
    }

    /// 接收已解析的文章列表
    pub fn receive_posts(&mut self, ticket: u32, posts: Vec<Post>) -> Effect {
        log::debug!("获取到 {} 篇文章", posts.len());
        self.dispatch(Action::FetchSucceeded { ticket, posts })
    }

    /// 获取失败：清除加载状态，文章列表置空
    pub fn fail_fetch(&mut self, ticket: u32, message: &str) -> Effect {
        log::error!("获取文章失败: {}", message);
        self.dispatch(Action::FetchFailed {
            ticket,
            message: message.to_string(),
        })
    }

    /// 切换分类，返回新的查询字符串
    pub fn toggle(&mut self, name: &str) -> &str {
        self.dispatch(Action::Toggle(name.to_string()));
        &self.search
    }

    /// 清空已选分类，返回新的查询字符串
    pub fn clear(&mut self) -> &str {
        self.dispatch(Action::Clear);
        &self.search
    }

    pub fn load_more(&mut self) {
        self.dispatch(Action::LoadMore);
    }

    /// 加载到第 `page` 页，超过最后一页时停在最后一页
    pub fn load_until(&mut self, page: usize) {
        let total = count_matching(&self.state.posts, &self.state.selection);
        let last = total.div_ceil(self.config.page_size).max(1);
        self.dispatch(Action::LoadPage(page.clamp(1, last)));
    }

    /// 当前列表视图
    pub fn view(&self) -> PostListView<'_> {
        derive_view(
            &self.state.posts,
            &self.state.selection,
            self.state.page,
            self.config.page_size,
        )
    }

    pub fn detail(&self, id: &str) -> PostDetail<'_> {
        let pending = matches!(self.state.fetch, FetchStatus::Idle | FetchStatus::Loading);
        find_post(&self.state.posts, id, pending)
    }

    pub fn categories(&self) -> &[AggregatedCategory] {
        &self.state.categories
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn state(&self) -> &BlogState {
        &self.state
    }
}
