use crate::forms::{parse_decimal, require, require_positive, FieldErrors};
use crate::models::{resequence_lines, POLineItem, PurchaseOrder};

/// Editable cells of one PO line, in tab order. Line numbers are not editable;
/// the controller owns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoLineField {
    PartId,
    Description,
    Quantity,
    UnitCost,
}

/// Form state for the create/edit purchase order page. The line table is
/// item-numbered: rows carry contiguous 1-based line numbers and removing a
/// row resequences the survivors.
#[derive(Clone, Debug, Default)]
pub struct PurchaseOrderForm {
    pub po_number: String,
    pub client: String,
    pub destination: String,
    pub vendor: String,
    pub ship_via: String,
    pub notes: String,
    lines: Vec<POLineItem>,
}

impl PurchaseOrderForm {
    pub fn new() -> Self {
        let mut form = Self::default();
        form.add_row();
        form
    }

    pub fn from_record(po: &PurchaseOrder) -> Self {
        Self {
            po_number: po.po_number.clone(),
            client: po.client.clone(),
            destination: po.destination.clone(),
            vendor: po.vendor.clone(),
            ship_via: po.ship_via.clone(),
            notes: po.notes.clone(),
            lines: po.lines.clone(),
        }
    }

    pub fn lines(&self) -> &[POLineItem] {
        &self.lines
    }

    pub fn add_row(&mut self) {
        let mut next = self.lines.clone();
        next.push(POLineItem {
            line_number: next.len() as u32 + 1,
            ..POLineItem::default()
        });
        self.lines = next;
    }

    /// Removes one line and resequences the remaining line numbers to 1..N in
    /// original relative order.
    pub fn remove_row(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        let mut next = self.lines.clone();
        next.remove(index);
        resequence_lines(&mut next);
        self.lines = next;
    }

    pub fn edit_cell(&mut self, index: usize, field: PoLineField, value: &str) {
        let Some(current) = self.lines.get(index) else {
            return;
        };
        let mut line = current.clone();
        match field {
            PoLineField::PartId => line.part_id = value.to_string(),
            PoLineField::Description => line.description = value.to_string(),
            PoLineField::Quantity => line.quantity = parse_decimal(value),
            PoLineField::UnitCost => line.unit_cost = parse_decimal(value),
        }
        let mut next = self.lines.clone();
        next[index] = line;
        self.lines = next;
    }

    pub fn tab_append(&mut self, index: usize, field: PoLineField) -> Option<usize> {
        if field == PoLineField::UnitCost && index + 1 == self.lines.len() {
            self.add_row();
            return Some(self.lines.len() - 1);
        }
        None
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "po_number", &self.po_number);
        require(&mut errors, "client", &self.client);
        require(&mut errors, "destination", &self.destination);
        require(&mut errors, "vendor", &self.vendor);
        require(&mut errors, "ship_via", &self.ship_via);
        if self.lines.is_empty() {
            errors.insert("lines".to_string(), "At least one line item is required".to_string());
        }
        for (i, line) in self.lines.iter().enumerate() {
            require(&mut errors, &format!("lines[{}].part_id", i), &line.part_id);
            require(
                &mut errors,
                &format!("lines[{}].description", i),
                &line.description,
            );
            require_positive(&mut errors, &format!("lines[{}].quantity", i), &line.quantity);
        }
        errors
    }

    pub fn to_record(&self) -> PurchaseOrder {
        PurchaseOrder {
            po_number: self.po_number.clone(),
            client: self.client.clone(),
            destination: self.destination.clone(),
            vendor: self.vendor.clone(),
            ship_via: self.ship_via.clone(),
            notes: self.notes.clone(),
            lines: self.lines.clone(),
        }
    }
}
