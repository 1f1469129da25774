//! URL查询字符串读写
//!
//! 只改动目标参数，其他参数原样保留。

/// 读取参数的原始值（未解码）。同名参数取第一次出现的值，和 `URLSearchParams.get` 一致
pub fn read_raw_param<'a>(search: &'a str, key: &str) -> Option<&'a str> {
    pairs(search).find(|(k, _)| decode(k) == key).map(|(_, v)| v)
}

/// 读取参数值并解码。参数不存在时返回 `None`
pub fn read_param(search: &str, key: &str) -> Option<String> {
    read_raw_param(search, key).map(decode)
}

/// 写入参数。`value` 必须已经编码，原样写入；为 `None` 时删除该参数
///
/// 返回新的查询字符串，不为空时以 `?` 开头。
pub fn write_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut written = false;

    for (k, v) in pairs(search) {
        if decode(k) != key {
            out.push(join_pair(k, v));
            continue;
        }
        // 只替换第一次出现的位置，也就是 read_param 读取的那一个；其余同名参数丢弃
        if let (Some(value), false) = (value, written) {
            out.push(encoded_pair(key, value));
            written = true;
        }
    }

    if let (Some(value), false) = (value, written) {
        out.push(encoded_pair(key, value));
    }

    if out.is_empty() {
        String::new()
    } else {
        format!("?{}", out.join("&"))
    }
}

fn pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| part.split_once('=').unwrap_or((part, "")))
}

fn join_pair(k: &str, v: &str) -> String {
    format!("{}={}", k, v)
}

fn encoded_pair(key: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(key), value)
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            log::warn!("查询参数解码失败，保留原值 {}: {}", raw, e);
            spaced
        }
    }
}
