use log::{debug, trace};

use super::layout;
use super::reader::DescriptorReader;
use crate::{Degree, FieldRecord, NodeKind, NodeLayout, Region, Section, Span};

/// Decode a descriptor with the layout selected by `kind`.
pub fn decode(kind: NodeKind, degree: Degree, data: &str) -> NodeLayout {
    match kind {
        NodeKind::Leaf => decode_leaf(data, degree),
        NodeKind::Internal => decode_internal(data, degree),
    }
}

/// Slice a leaf descriptor: header, entries, sibling pointers, tail.
pub fn decode_leaf(data: &str, degree: Degree) -> NodeLayout {
    let reader = DescriptorReader::new(data);
    let entries = degree.entry_count();
    log_start(NodeKind::Leaf, degree, &reader, layout::leaf_fixed_len(entries));

    let mut offset = layout::HEADER_LEN;
    let mut entry_records = Vec::with_capacity(entries);
    for _ in 0..entries {
        entry_records.push(record(
            Region::Entry,
            Span::closed(offset, offset + layout::ENTRY_LEN),
            vec![
                reader.read_owned(layout::at(offset, &layout::LEAF_KEY_RANGE)),
                reader.read_owned(layout::at(offset, &layout::LEAF_POINTER_TYPE_RANGE)),
                reader.read_owned(layout::at(offset, &layout::LEAF_POINTER_POSITION_RANGE)),
                reader.read_owned(layout::at(offset, &layout::LEAF_POINTER_CHUNK_RANGE)),
            ],
        ));
        offset += layout::ENTRY_LEN;
    }

    let mut siblings = Vec::with_capacity(layout::LEAF_SIBLING_COUNT);
    for _ in 0..layout::LEAF_SIBLING_COUNT {
        siblings.push(pointer_record(&reader, Region::Sibling, offset));
        offset += layout::POINTER_LEN;
    }

    NodeLayout {
        kind: NodeKind::Leaf,
        degree,
        sections: vec![
            header_section(&reader),
            Section {
                records: entry_records,
            },
            Section { records: siblings },
            tail_section(&reader, offset),
        ],
    }
}

/// Slice an internal descriptor: header, first child, key/child pairs, tail.
pub fn decode_internal(data: &str, degree: Degree) -> NodeLayout {
    let reader = DescriptorReader::new(data);
    let entries = degree.entry_count();
    log_start(
        NodeKind::Internal,
        degree,
        &reader,
        layout::internal_fixed_len(entries),
    );

    let mut offset = layout::HEADER_LEN;
    let mut children = Vec::with_capacity(1 + 2 * entries);
    children.push(pointer_record(&reader, Region::ChildPointer, offset));
    offset += layout::POINTER_LEN;

    for _ in 0..entries {
        let key_end = offset + layout::KEY_LEN;
        children.push(record(
            Region::Key,
            Span::closed(offset, key_end),
            vec![reader.read_owned(offset..key_end)],
        ));
        children.push(pointer_record(&reader, Region::ChildPointer, key_end));
        offset += layout::ENTRY_LEN;
    }

    NodeLayout {
        kind: NodeKind::Internal,
        degree,
        sections: vec![
            header_section(&reader),
            Section { records: children },
            tail_section(&reader, offset),
        ],
    }
}

fn log_start(kind: NodeKind, degree: Degree, reader: &DescriptorReader<'_>, fixed_len: usize) {
    debug!(
        "decoding {kind} node: degree={degree} length={}",
        reader.len()
    );
    if reader.len() < fixed_len {
        debug!(
            "descriptor shorter than {kind} layout: need {fixed_len} characters, got {}",
            reader.len()
        );
    }
}

fn record(region: Region, span: Span, fields: Vec<String>) -> FieldRecord {
    trace!("{region:?} {span}: {fields:?}");
    FieldRecord {
        region,
        span,
        fields,
    }
}

fn pointer_record(reader: &DescriptorReader<'_>, region: Region, offset: usize) -> FieldRecord {
    record(
        region,
        Span::closed(offset, offset + layout::POINTER_LEN),
        vec![
            reader.read_owned(layout::at(offset, &layout::POINTER_TYPE_RANGE)),
            reader.read_owned(layout::at(offset, &layout::POINTER_POSITION_RANGE)),
            reader.read_owned(layout::at(offset, &layout::POINTER_CHUNK_RANGE)),
        ],
    )
}

fn header_section(reader: &DescriptorReader<'_>) -> Section {
    Section {
        records: vec![record(
            Region::Header,
            Span::closed(layout::HEADER_RANGE.start, layout::HEADER_RANGE.end),
            vec![reader.read_owned(layout::HEADER_RANGE)],
        )],
    }
}

fn tail_section(reader: &DescriptorReader<'_>, offset: usize) -> Section {
    let chunks = reader
        .chunks_from(offset, layout::TAIL_CHUNK_LEN)
        .into_iter()
        .map(str::to_string)
        .collect();
    Section {
        records: vec![record(Region::Tail, Span::open(offset), chunks)],
    }
}
