use std::fmt;
use std::sync::Arc;

use ustr::Ustr;

use crate::record::{Record, display_field};

type Extract = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// One table column: a header label and how to read its cell from a record.
#[derive(Clone)]
pub struct ColumnDef {
    label: Ustr,
    extract: Extract,
}

impl ColumnDef {
    pub fn new(
        label: impl AsRef<str>,
        extract: impl Fn(&Record) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: Ustr::from(label.as_ref()),
            extract: Arc::new(extract),
        }
    }

    /// Column showing a top-level field as-is.
    pub fn field(label: impl AsRef<str>, field: &'static str) -> Self {
        Self::new(label, move |record| display_field(record, field))
    }

    pub fn label(&self) -> Ustr {
        self.label
    }

    pub fn cell(&self, record: &Record) -> String {
        (self.extract)(record)
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
