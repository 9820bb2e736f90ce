use crate::utils::error::ContentError;
use serde_json::Value;

/// 內容服務一次讀取的原始結果
#[derive(Debug)]
pub enum Fetched {
    /// `data` envelope 內有內容
    Found(Value),
    /// `data` 為 `null` 或空陣列
    Empty,
    /// 網路錯誤、非 2xx、或 body 無法解析
    Failed(ContentError),
}

impl Fetched {
    /// 拆開 `{ "data": ... }` envelope
    pub fn from_envelope(resource: &str, body: Value) -> Self {
        let Value::Object(mut envelope) = body else {
            return Fetched::Failed(ContentError::MalformedBody {
                resource: resource.to_string(),
                message: "response body is not a JSON object".to_string(),
            });
        };

        match envelope.remove("data") {
            None => Fetched::Failed(ContentError::MalformedBody {
                resource: resource.to_string(),
                message: "response has no `data` envelope".to_string(),
            }),
            Some(Value::Null) => Fetched::Empty,
            Some(Value::Array(items)) if items.is_empty() => Fetched::Empty,
            Some(data) => Fetched::Found(data),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Fetched::Found(_) => "found",
            Fetched::Empty => "empty",
            Fetched::Failed(_) => "failed",
        }
    }
}

/// 正規化後的結果；list 與 singleton 路由各自只有一種轉換方式
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Live(T),
    Empty,
    Unavailable,
}

impl<T> Outcome<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn live(self) -> Option<T> {
        match self {
            Outcome::Live(value) => Some(value),
            Outcome::Empty | Outcome::Unavailable => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Live(value) => Outcome::Live(f(value)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Unavailable => Outcome::Unavailable,
        }
    }

    /// singleton 路由：沒有資料一律為 `None`
    pub fn into_single(self) -> Option<T> {
        self.live()
    }

    /// 非 Live 時改用 fallback；fallback 也沒有則維持原狀
    pub fn or_fallback(self, fallback: Option<T>) -> Outcome<T> {
        match (self, fallback) {
            (Outcome::Live(value), _) => Outcome::Live(value),
            (_, Some(value)) => Outcome::Live(value),
            (other, None) => other,
        }
    }
}

impl<T> Outcome<Vec<T>> {
    /// 空集合視為 Empty
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Live(items)
        }
    }

    /// list 路由：沒有資料一律為 `[]`
    pub fn into_list(self) -> Vec<T> {
        self.live().unwrap_or_default()
    }
}
