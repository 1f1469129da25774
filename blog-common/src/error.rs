use std::io;

/// 博客模块的统一错误类型
#[derive(thiserror::Error, Debug)]
pub enum BlogError {
    /// 文章数据解析失败（JSON格式或字段不符合约定）
    #[error("解析文章数据失败: {0}")]
    Payload(#[from] serde_json::Error),

    /// 配置不合法
    #[error("配置无效: {0}")]
    Config(String),

    /// 读取本地文件失败
    #[error("读取文件失败: {0}")]
    Io(#[from] io::Error),
}
