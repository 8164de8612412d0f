use board_logging::board_warn;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::source::ResponseShape;
use crate::{BoardItem, FailureKind, FetchError, PageMeta, PageResponse};

/// Item as it appears on the wire. Apps carry `name`, services `title`.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawItem> for BoardItem {
    fn from(raw: RawItem) -> Self {
        Self {
            id: raw.id,
            title: raw.title.or(raw.name).unwrap_or_default(),
            provider: raw.provider.unwrap_or_default(),
            status: raw.status,
            extra: raw.extra,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    content: Option<Vec<RawItem>>,
    #[serde(default)]
    meta: Option<Value>,
}

/// Paging block as sent; any field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawMeta {
    page: Option<u32>,
    total_pages: Option<u32>,
    total_elements: Option<u64>,
    content_size: Option<u32>,
}

impl RawMeta {
    fn into_meta(self) -> Option<PageMeta> {
        Some(PageMeta {
            page: self.page?,
            total_pages: self.total_pages?,
            total_elements: self.total_elements,
            content_size: self.content_size,
        })
    }
}

fn parse_meta(value: Value) -> Option<PageMeta> {
    serde_json::from_value::<RawMeta>(value)
        .ok()
        .and_then(RawMeta::into_meta)
}

/// Decodes a response body.
///
/// Returns `Ok(None)` for a `null` body or a body lacking `content` or a
/// usable `meta` (`page` and `totalPages`); only bytes that are not JSON, or items without an `id`, are errors.
pub fn decode_page(body: &[u8], shape: ResponseShape) -> Result<Option<PageResponse>, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;

    match (shape, value) {
        (_, Value::Null) => Ok(None),
        (ResponseShape::Paged, value @ Value::Object(_)) => {
            let raw: RawPage = serde_json::from_value(value)
                .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
            match (raw.content, raw.meta.and_then(parse_meta)) {
                (Some(content), Some(meta)) => Ok(Some(PageResponse {
                    items: content.into_iter().map(BoardItem::from).collect(),
                    meta,
                })),
                _ => {
                    board_warn!("Paged response without content/meta; treating as empty");
                    Ok(None)
                }
            }
        }
        (ResponseShape::Plain, value @ Value::Array(_)) => {
            let raw: Vec<RawItem> = serde_json::from_value(value)
                .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
            let content_size = u32::try_from(raw.len()).ok();
            Ok(Some(PageResponse {
                items: raw.into_iter().map(BoardItem::from).collect(),
                meta: PageMeta {
                    page: 0,
                    total_pages: 1,
                    total_elements: content_size.map(u64::from),
                    content_size,
                },
            }))
        }
        (shape, _) => {
            board_warn!("Unexpected body for {:?} response; treating as empty", shape);
            Ok(None)
        }
    }
}
