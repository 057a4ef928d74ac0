use crate::forms::{parse_decimal, require, require_positive, FieldErrors};
use crate::models::{BoxItem, WarehouseReceipt};

/// Editable cells of one box row, in tab order. `Weight` is the last cell;
/// tabbing out of it on the last row appends a fresh row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoxField {
    Number,
    BoxType,
    Length,
    Width,
    Height,
    Location,
    Weight,
}

/// Form state for the create/edit warehouse receipt page.
#[derive(Clone, Debug, Default)]
pub struct WarehouseReceiptForm {
    pub wr_number: String,
    pub client: String,
    pub carrier: String,
    pub tracking_number: String,
    pub received_by: String,
    pub hazmat: bool,
    pub hazmat_code: String,
    pub notes: String,
    pub po_number: String,
    boxes: Vec<BoxItem>,
}

impl WarehouseReceiptForm {
    /// Fresh form with one blank box row, matching the empty page on mount.
    pub fn new() -> Self {
        Self {
            boxes: vec![BoxItem::default()],
            ..Self::default()
        }
    }

    /// Seeds the form from a fetched receipt for the edit page.
    pub fn from_record(wr: &WarehouseReceipt) -> Self {
        Self {
            wr_number: wr.wr_number.clone(),
            client: wr.client.clone(),
            carrier: wr.carrier.clone(),
            tracking_number: wr.tracking_number.clone(),
            received_by: wr.received_by.clone(),
            hazmat: wr.hazmat,
            hazmat_code: wr.hazmat_code.clone(),
            notes: wr.notes.clone(),
            po_number: wr.po_number.clone(),
            boxes: wr.boxes.clone(),
        }
    }

    pub fn boxes(&self) -> &[BoxItem] {
        &self.boxes
    }

    pub fn add_row(&mut self) {
        let mut next = self.boxes.clone();
        next.push(BoxItem::default());
        self.boxes = next;
    }

    pub fn remove_row(&mut self, index: usize) {
        if index >= self.boxes.len() {
            return;
        }
        let mut next = self.boxes.clone();
        next.remove(index);
        self.boxes = next;
    }

    pub fn edit_cell(&mut self, index: usize, field: BoxField, value: &str) {
        let Some(current) = self.boxes.get(index) else {
            return;
        };
        let mut row = current.clone();
        match field {
            BoxField::Number => row.number = value.to_string(),
            BoxField::BoxType => row.box_type = value.to_string(),
            BoxField::Length => row.length = parse_decimal(value),
            BoxField::Width => row.width = parse_decimal(value),
            BoxField::Height => row.height = parse_decimal(value),
            BoxField::Location => row.location = value.to_string(),
            BoxField::Weight => row.weight = parse_decimal(value),
        }
        let mut next = self.boxes.clone();
        next[index] = row;
        self.boxes = next;
    }

    /// Tab pressed in `field` of row `index`: when that was the last cell of
    /// the last row, appends a blank row and returns its index for focus.
    pub fn tab_append(&mut self, index: usize, field: BoxField) -> Option<usize> {
        if field == BoxField::Weight && index + 1 == self.boxes.len() {
            self.add_row();
            return Some(self.boxes.len() - 1);
        }
        None
    }

    /// Synchronous pre-submit validation. A non-empty result blocks the
    /// submit before any gateway call is made.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "wr_number", &self.wr_number);
        require(&mut errors, "client", &self.client);
        require(&mut errors, "carrier", &self.carrier);
        require(&mut errors, "tracking_number", &self.tracking_number);
        require(&mut errors, "received_by", &self.received_by);
        if self.hazmat {
            require(&mut errors, "hazmat_code", &self.hazmat_code);
        }
        if self.boxes.is_empty() {
            errors.insert("boxes".to_string(), "At least one box is required".to_string());
        }
        for (i, item) in self.boxes.iter().enumerate() {
            require(&mut errors, &format!("boxes[{}].number", i), &item.number);
            require(&mut errors, &format!("boxes[{}].box_type", i), &item.box_type);
            require(&mut errors, &format!("boxes[{}].location", i), &item.location);
            require_positive(&mut errors, &format!("boxes[{}].weight", i), &item.weight);
        }
        errors
    }

    pub fn to_record(&self) -> WarehouseReceipt {
        WarehouseReceipt {
            wr_number: self.wr_number.clone(),
            client: self.client.clone(),
            carrier: self.carrier.clone(),
            tracking_number: self.tracking_number.clone(),
            received_at: Some(chrono::Utc::now()),
            received_by: self.received_by.clone(),
            hazmat: self.hazmat,
            hazmat_code: self.hazmat_code.clone(),
            notes: self.notes.clone(),
            po_number: self.po_number.clone(),
            boxes: self.boxes.clone(),
            photo_urls: Vec::new(),
        }
    }
}
