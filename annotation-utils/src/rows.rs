//! Reader for the tab-separated annotation rows the annotation service
//! emits (CoNLL-U style: ID, FORM, LEMMA, UPOS, XPOS, FEATS, HEAD, DEPREL,
//! plus trailing columns we ignore).

use crate::{PartOfSpeech, TokenRecord};

/// A row with the right shape but a field we cannot interpret.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RowError {
    #[error("line {line}: invalid token id {value:?}")]
    InvalidId { line: usize, value: String },

    #[error("line {line}: invalid head id {value:?}")]
    InvalidHead { line: usize, value: String },
}

/// Parses annotator output into token records.
///
/// Comment lines (`#`), blank lines and rows with fewer than eight fields
/// are skipped, as are multiword-range ids (`"3-4"`) and empty-node ids
/// (`"3.1"`) — those annotate spans, not tree nodes. A well-formed row with
/// a non-numeric id or head field is an error.
pub fn parse(input: &str) -> Result<Vec<TokenRecord>, RowError> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 8 {
            continue;
        }
        if fields[0].contains('-') || fields[0].contains('.') {
            continue;
        }
        let line_no = index + 1;
        let id = fields[0].parse().map_err(|_| RowError::InvalidId {
            line: line_no,
            value: fields[0].to_string(),
        })?;
        let parent = fields[6].parse().map_err(|_| RowError::InvalidHead {
            line: line_no,
            value: fields[6].to_string(),
        })?;
        records.push(TokenRecord {
            id,
            word: fields[1].to_string(),
            lemma: fields[2].to_string(),
            pos: PartOfSpeech::parse_lossy(fields[3]),
            xpos: fields[4].to_string(),
            feats: fields[5].to_string(),
            parent,
            relation: fields[7].to_string(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# sent_id = 1
# text = Lynda owns a car.
1\tLynda\tLynda\tPROPN\tNNP\tNumber=Sing\t2\tnsubj\t_\t_
2\towns\town\tVERB\tVBZ\t_\t0\troot\t_\t_
3\ta\ta\tDET\tDT\t_\t4\tdet\t_\t_
4\tcar\tcar\tNOUN\tNN\t_\t2\tobj\t_\t_
5\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_
";

    #[test]
    fn test_parses_basic_rows() {
        let records = parse(SAMPLE).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].word, "Lynda");
        assert_eq!(records[0].pos, PartOfSpeech::Propn);
        assert_eq!(records[1].parent, 0);
        assert_eq!(records[3].relation, "obj");
        assert_eq!(records[4].pos, PartOfSpeech::Punct);
    }

    #[test]
    fn test_skips_comments_ranges_and_short_rows() {
        let input = "\
# a comment
1-2\tdu\tdu\t_\t_\t_\t_\t_\t_\t_
1\tde\tde\tADP\t_\t_\t2\tcase\t_\t_
2\tle\tle\tDET\t_\t_\t3\tdet\t_\t_
not a row
3.1\tghost\tghost\t_\t_\t_\t_\t_\t_\t_
3\teau\teau\tNOUN\t_\t_\t0\troot\t_\t_
";
        let records = parse(input).unwrap();
        assert_eq!(
            records.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_unknown_pos_degrades_to_x() {
        let input = "1\tfoo\tfoo\tWEIRD\t_\t_\t0\troot\t_\t_";
        let records = parse(input).unwrap();
        assert_eq!(records[0].pos, PartOfSpeech::X);
    }

    #[test]
    fn test_bad_numeric_fields_error() {
        let bad_id = "x\tfoo\tfoo\tNOUN\t_\t_\t0\troot\t_\t_";
        assert!(matches!(
            parse(bad_id),
            Err(RowError::InvalidId { line: 1, .. })
        ));

        let bad_head = "1\tfoo\tfoo\tNOUN\t_\t_\ty\troot\t_\t_";
        assert!(matches!(
            parse(bad_head),
            Err(RowError::InvalidHead { line: 1, .. })
        ));
    }
}
