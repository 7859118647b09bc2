//! Two-pass assembly
//!
//! The first pass walks the items to assign every label an address; the
//! second emits bytes into the image. Labels may be referenced before
//! they are defined.

use crate::error::{AssemblerError, Result};
use crate::parser::{narrow, parse, Item, Operand};
use std::collections::HashMap;
use stax_spec::{Opcode, MEM_SIZE};

/// Assemble source text into a raw program image.
///
/// The image is trimmed to its highest emitted byte; loading it at
/// address 0 reproduces the assembled layout.
pub fn assemble(source: &str) -> Result<Vec<u8>> {
    let items = parse(source)?;
    let labels = collect_labels(&items)?;
    emit(&items, &labels)
}

/// Bytes an item occupies in the image.
fn item_width(item: &Item) -> usize {
    match item {
        Item::Label { .. } | Item::Org { .. } => 0,
        Item::Data { bytes, .. } => bytes.len(),
        Item::Inst { inst, .. } => {
            1 + if inst.opcode == Opcode::Lit {
                inst.size.width() as usize
            } else {
                0
            }
        }
    }
}

fn collect_labels(items: &[Item]) -> Result<HashMap<String, u32>> {
    let mut labels = HashMap::new();
    let mut here: usize = 0;
    for item in items {
        match item {
            Item::Label { name } => {
                if labels.insert(name.clone(), here as u32).is_some() {
                    return Err(AssemblerError::DuplicateLabel(name.clone()));
                }
            }
            Item::Org { addr } => here = *addr as usize,
            _ => here += item_width(item),
        }
    }
    Ok(labels)
}

fn emit(items: &[Item], labels: &HashMap<String, u32>) -> Result<Vec<u8>> {
    let mut image = vec![0u8; MEM_SIZE];
    let mut here: usize = 0;
    let mut extent: usize = 0;

    for item in items {
        match item {
            Item::Label { .. } => {}
            Item::Org { addr } => here = *addr as usize,
            Item::Data { bytes, line } => {
                let end = here + bytes.len();
                if end > MEM_SIZE {
                    return Err(AssemblerError::ImageOverflow { line: *line });
                }
                image[here..end].copy_from_slice(bytes);
                here = end;
                extent = extent.max(end);
            }
            Item::Inst {
                inst,
                operand,
                line,
            } => {
                let end = here + item_width(item);
                if end > MEM_SIZE {
                    return Err(AssemblerError::ImageOverflow { line: *line });
                }
                image[here] = inst.encode();
                here += 1;
                if let Some(op) = operand {
                    let value = match op {
                        Operand::Value(v) => *v,
                        Operand::Label(name) => {
                            *labels.get(name).ok_or_else(|| AssemblerError::UndefinedLabel {
                                line: *line,
                                name: name.clone(),
                            })? as i64
                        }
                    };
                    let width = inst.size.width() as usize;
                    let value = narrow(value, width as u32, *line)?;
                    let raw = (value as u32).to_le_bytes();
                    image[here..here + width].copy_from_slice(&raw[..width]);
                    here += width;
                }
                extent = extent.max(here);
            }
        }
    }

    image.truncate(extent);
    Ok(image)
}
