use serde::Serialize;
use std::collections::BTreeSet;

/// 参数值中分隔分类名称的字符
pub const SEPARATOR: char = ',';

/// 已选分类名称集合
///
/// 内部有序，写回URL时名称按字典序拼接，同一集合总是得到同一个参数值。
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Selection(BTreeSet<String>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从查询参数值解析，空片段被忽略
    pub fn from_param(value: &str) -> Self {
        Self(
            value
                .split(SEPARATOR)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// 转换为已编码的查询参数值：每个名称单独编码，再用字面的 `,` 拼接。
    /// 集合为空时返回 `None`，表示应删除该参数
    pub fn to_param(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let names: Vec<String> = self
            .0
            .iter()
            .map(|name| urlencoding::encode(name).into_owned())
            .collect();
        Some(names.join(&SEPARATOR.to_string()))
    }

    /// 切换分类：已选则移除，未选则加入。返回切换后是否处于选中状态
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.0.remove(name) {
            false
        } else {
            self.0.insert(name.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
