use crate::forms::{parse_decimal, require, require_positive, FieldErrors};
use crate::models::{MRLineItem, MaterialReceipt};

/// Editable cells of one material receipt line, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MrLineField {
    WrNumber,
    QuantityReceived,
    BoxNumber,
    PoLineNumber,
}

/// Form state for the create material receipt page. The receipt id is the
/// originating warehouse receipt id.
#[derive(Clone, Debug, Default)]
pub struct MaterialReceiptForm {
    pub mr_number: String,
    pub entered_by: String,
    pub notes: String,
    lines: Vec<MRLineItem>,
}

impl MaterialReceiptForm {
    pub fn new() -> Self {
        Self {
            lines: vec![MRLineItem::default()],
            ..Self::default()
        }
    }

    pub fn from_record(mr: &MaterialReceipt) -> Self {
        Self {
            mr_number: mr.mr_number.clone(),
            entered_by: mr.entered_by.clone(),
            notes: mr.notes.clone(),
            lines: mr.lines.clone(),
        }
    }

    pub fn lines(&self) -> &[MRLineItem] {
        &self.lines
    }

    pub fn add_row(&mut self) {
        let mut next = self.lines.clone();
        next.push(MRLineItem::default());
        self.lines = next;
    }

    pub fn remove_row(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        let mut next = self.lines.clone();
        next.remove(index);
        self.lines = next;
    }

    pub fn edit_cell(&mut self, index: usize, field: MrLineField, value: &str) {
        let Some(current) = self.lines.get(index) else {
            return;
        };
        let mut line = current.clone();
        match field {
            MrLineField::WrNumber => line.wr_number = value.to_string(),
            MrLineField::QuantityReceived => line.quantity_received = parse_decimal(value),
            MrLineField::BoxNumber => line.box_number = value.to_string(),
            MrLineField::PoLineNumber => {
                line.po_line_number = value.trim().parse().unwrap_or(0);
            }
        }
        let mut next = self.lines.clone();
        next[index] = line;
        self.lines = next;
    }

    pub fn tab_append(&mut self, index: usize, field: MrLineField) -> Option<usize> {
        if field == MrLineField::PoLineNumber && index + 1 == self.lines.len() {
            self.add_row();
            return Some(self.lines.len() - 1);
        }
        None
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "mr_number", &self.mr_number);
        require(&mut errors, "entered_by", &self.entered_by);
        if self.lines.is_empty() {
            errors.insert("lines".to_string(), "At least one line item is required".to_string());
        }
        for (i, line) in self.lines.iter().enumerate() {
            require(&mut errors, &format!("lines[{}].wr_number", i), &line.wr_number);
            require(&mut errors, &format!("lines[{}].box_number", i), &line.box_number);
            require_positive(
                &mut errors,
                &format!("lines[{}].quantity_received", i),
                &line.quantity_received,
            );
            if line.po_line_number == 0 {
                errors.insert(
                    format!("lines[{}].po_line_number", i),
                    "PO line reference is required".to_string(),
                );
            }
        }
        errors
    }

    pub fn to_record(&self) -> MaterialReceipt {
        MaterialReceipt {
            mr_number: self.mr_number.clone(),
            entered_by: self.entered_by.clone(),
            notes: self.notes.clone(),
            lines: self.lines.clone(),
        }
    }
}
