use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use color_eyre::eyre::{eyre, Result};

use blog_common::{parse_posts, BlogError, Post};
use post_filter::config::DEFAULT_QUERY_PARAM;
use post_filter::query;
use post_filter::{
    AggregatedCategory, BlogStore, PostDetail, PostListView, Selection, ViewConfig,
};

// 主函数
fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let matches = cli().get_matches();

    // --verbose 打开调试日志，否则遵循 RUST_LOG
    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match matches.subcommand() {
        Some(("categories", sub)) => run_categories(sub),
        Some(("list", sub)) => run_list(sub),
        Some(("show", sub)) => run_show(sub),
        _ => Err(eyre!("未知的子命令")),
    }
}

fn cli() -> Command {
    let input = Arg::new("input")
        .short('i')
        .long("input")
        .value_name("POSTS_JSON")
        .help("文章数据文件路径（接口返回的JSON）")
        .required(true);

    Command::new("blog-cli")
        .version(env!("CARGO_PKG_VERSION"))
        .about("按分类浏览文章数据")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("显示详细信息")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("categories")
                .about("列出去重后的分类及文章数")
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("list")
                .about("按分类筛选并分页列出文章")
                .arg(input.clone())
                .arg(
                    Arg::new("categories")
                        .short('c')
                        .long("categories")
                        .value_name("NAMES")
                        .help("逗号分隔的分类名称"),
                )
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .value_name("PAGE")
                        .help("加载到第几页")
                        .value_parser(value_parser!(usize))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("page_size")
                        .long("page-size")
                        .value_name("SIZE")
                        .help("每页条数")
                        .value_parser(value_parser!(usize))
                        .default_value("6"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("显示单篇文章")
                .arg(input)
                .arg(
                    Arg::new("id")
                        .long("id")
                        .value_name("POST_ID")
                        .help("文章ID")
                        .required(true),
                ),
        )
}

/// 读取文章数据文件
fn load_posts(path: &Path) -> Result<Vec<Post>, BlogError> {
    let json = fs::read_to_string(path)?;
    let posts = parse_posts(&json)?;
    log::debug!("从 {} 读取 {} 篇文章", path.display(), posts.len());
    Ok(posts)
}

/// 用文件内容建立状态容器，和页面走同一套请求流程
fn load_store(matches: &ArgMatches, search: &str, config: ViewConfig) -> Result<BlogStore> {
    let path = matches
        .get_one::<String>("input")
        .ok_or_else(|| eyre!("缺少 --input 参数"))?;
    let posts = load_posts(Path::new(path))?;

    let mut store = BlogStore::new(search, config)?;
    let ticket = store.begin_fetch();
    store.receive_posts(ticket, posts);
    Ok(store)
}

fn run_categories(matches: &ArgMatches) -> Result<ExitCode> {
    let store = load_store(matches, "", ViewConfig::default())?;
    print!("{}", render_categories(store.categories()));
    Ok(ExitCode::SUCCESS)
}

fn run_list(matches: &ArgMatches) -> Result<ExitCode> {
    let store = list_store(matches)?;
    print!("{}", render_list(&store.view()));
    Ok(ExitCode::SUCCESS)
}

/// 按 `--categories` 和 `--page` 建立列表状态，页码超出时停在最后一页
fn list_store(matches: &ArgMatches) -> Result<BlogStore> {
    let page = *matches.get_one::<usize>("page").unwrap_or(&1);
    let page_size = *matches.get_one::<usize>("page_size").unwrap_or(&6);
    let value = matches
        .get_one::<String>("categories")
        .and_then(|names| Selection::from_param(names).to_param());
    let search = query::write_param("", DEFAULT_QUERY_PARAM, value.as_deref());

    let config = ViewConfig {
        page_size,
        ..ViewConfig::default()
    };
    let mut store = load_store(matches, &search, config)?;
    store.load_until(page);
    Ok(store)
}

fn run_show(matches: &ArgMatches) -> Result<ExitCode> {
    let id = matches
        .get_one::<String>("id")
        .ok_or_else(|| eyre!("缺少 --id 参数"))?;
    let store = load_store(matches, "", ViewConfig::default())?;

    let detail = store.detail(id);
    print!("{}", render_detail(&detail));
    match detail {
        PostDetail::Found { .. } => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE),
    }
}

fn render_categories(categories: &[AggregatedCategory]) -> String {
    if categories.is_empty() {
        return "没有分类\n".to_string();
    }

    let width = categories.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for category in categories {
        out.push_str(&format!(
            "{:<width$}  {:>4}  [{}]\n",
            category.name,
            category.count,
            category.original_ids.join(", "),
            width = width
        ));
    }
    out
}

fn render_list(view: &PostListView<'_>) -> String {
    let mut out = String::new();
    for post in &view.posts {
        out.push_str(&format!(
            "{}  {}  {}  ({})\n",
            post.id,
            post.publish_date.format("%Y-%m-%d"),
            post.title,
            category_names(post)
        ));
    }
    out.push_str(&format!(
        "显示 {}/{} 篇，第 {} 页{}\n",
        view.posts.len(),
        view.total,
        view.page,
        if view.has_more { "，还有更多" } else { "" }
    ));
    out
}

fn render_detail(detail: &PostDetail<'_>) -> String {
    match detail {
        PostDetail::Found { post, .. } => format!(
            "{}\n作者: {}\n发布: {}\n分类: {}\n\n{}\n",
            post.title,
            post.author.name,
            post.publish_date.to_rfc3339(),
            category_names(post),
            post.summary
        ),
        PostDetail::NotFound { id, back_to } => {
            format!("未找到文章: {}（返回列表: {}）\n", id, back_to)
        }
        PostDetail::Loading => "加载中\n".to_string(),
    }
}

fn category_names(post: &Post) -> String {
    post.categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
