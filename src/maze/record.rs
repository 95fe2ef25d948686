use std::str::FromStr;

use crate::errors::LoadError;
use super::EXIT;

/// Slot value meaning "no connection in this slot"
pub const NO_EDGE_MARKER: &str = "A";
/// Slot value meaning "connection to the EXIT node"
pub const EXIT_MARKER: &str = "W";


/// Comma separated, trimmed fields of a line; trailing empty fields are dropped
/// so `START,0,0,W,A,` still reads as five values
fn split_fields(text: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = text.split(',').map(str::trim).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}


/// First line of a maze description: `totalNodes,columns,rows`
///
/// The values are informational. Traversal never depends on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Header {
    pub node_count: usize,
    pub columns: usize,
    pub rows: usize,
}

impl Header {

    pub(crate) fn parse(text: &str, line: usize) -> Result<Self, LoadError> {
        let fields = split_fields(text);
        if fields.len() != 3 {
            return Err(LoadError::MalformedHeader {
                line,
                reason: format!("expected 3 comma separated values, found {}", fields.len()),
            });
        }

        let value = |field: &str| {
            field.parse::<usize>().map_err(|_| LoadError::MalformedHeader {
                line,
                reason: format!("{field:?} is not a non-negative integer"),
            })
        };

        Ok(Self {
            node_count: value(fields[0])?,
            columns: value(fields[1])?,
            rows: value(fields[2])?,
        })
    }

    /// True if (x, y) lies on the declared grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let inside = |v: i32, bound: usize| usize::try_from(v).is_ok_and(|v| v < bound);
        inside(x, self.columns) && inside(y, self.rows)
    }
}


/// A connection slot of a record, decoded once at parse time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    NoEdge,
    EdgeToExit,
    EdgeTo(String),
}

impl Slot {

    /// Name of the neighbor this slot connects to, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            Slot::NoEdge => None,
            Slot::EdgeToExit => Some(EXIT),
            Slot::EdgeTo(name) => Some(name.as_str()),
        }
    }
}

impl FromStr for Slot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("empty connection slot".to_string()),
            NO_EDGE_MARKER => Ok(Slot::NoEdge),
            EXIT_MARKER => Ok(Slot::EdgeToExit),
            name => Ok(Slot::EdgeTo(name.to_string())),
        }
    }
}


/// One node line: `name,x,y,slot1,slot2`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeRecord {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub slots: [Slot; 2],
    /// 1-based line number in the source text
    pub line: usize,
}

impl NodeRecord {

    pub(crate) fn parse(text: &str, line: usize) -> Result<Self, LoadError> {
        let fields = split_fields(text);
        let [name, x, y, slot1, slot2] = fields.as_slice() else {
            return Err(LoadError::MalformedRecord {
                line,
                reason: format!("expected 5 comma separated values, found {}", fields.len()),
            });
        };

        if name.is_empty() {
            return Err(LoadError::EmptyName { line });
        }

        let coordinate = |value: &str| {
            value.parse::<i32>().map_err(|_| LoadError::InvalidCoordinate {
                line,
                value: value.to_string(),
            })
        };
        let slot = |value: &str| {
            value.parse::<Slot>().map_err(|reason| LoadError::MalformedRecord { line, reason })
        };

        Ok(Self {
            name: name.to_string(),
            x: coordinate(*x)?,
            y: coordinate(*y)?,
            slots: [slot(*slot1)?, slot(*slot2)?],
            line,
        })
    }

    /// Neighbor names declared by this record, in slot order
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(Slot::target)
    }
}


/// Split raw maze text lines into a header and node records
/// Blank lines are skipped; the first non-blank line is the header
pub(crate) fn parse_lines<I, S>(lines: I) -> Result<(Header, Vec<NodeRecord>), LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut numbered = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| (i + 1, text))
        .filter(|(_, text)| !text.as_ref().trim().is_empty());

    let (header_line, header_text) = numbered.next().ok_or(LoadError::MissingHeader)?;
    let header = Header::parse(header_text.as_ref(), header_line)?;

    let records = numbered
        .map(|(line, text)| NodeRecord::parse(text.as_ref(), line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((header, records))
}
