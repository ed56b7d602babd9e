use serde::Serialize;

/// One step of the alignment between expected and heard phoneme sequences.
/// `Skip` marks a word index with no partner on the other side; `align`
/// itself never produces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    Keep {
        symbol: String,
    },
    #[serde(rename = "sub")]
    Substitute {
        from: String,
        to: String,
    },
    #[serde(rename = "ins")]
    Insert {
        symbol: String,
    },
    #[serde(rename = "del")]
    Delete {
        symbol: String,
    },
    Skip,
}

/// Edit distance between two phoneme sequences plus the operation sequence
/// that realises it. Unit cost per insertion and deletion; substitution costs
/// 0 when the symbols are equal, 1 otherwise. Ties during backtrace resolve
/// delete, then insert, then diagonal, so equal inputs always produce the
/// same operation list.
pub fn align(reference: &[String], hypothesis: &[String]) -> (usize, Vec<EditOp>) {
    let n = reference.len();
    let m = hypothesis.len();

    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in table.iter_mut().enumerate().skip(1) {
        row[0] = i;
    }
    for j in 1..=m {
        table[0][j] = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(reference[i - 1] != hypothesis[j - 1]);
            table[i][j] = (table[i - 1][j] + 1)
                .min(table[i][j - 1] + 1)
                .min(table[i - 1][j - 1] + cost);
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (n, m);
    while i > 0 || j > 0 {
        if i > 0 && table[i][j] == table[i - 1][j] + 1 {
            ops.push(EditOp::Delete {
                symbol: reference[i - 1].clone(),
            });
            i -= 1;
        } else if j > 0 && table[i][j] == table[i][j - 1] + 1 {
            ops.push(EditOp::Insert {
                symbol: hypothesis[j - 1].clone(),
            });
            j -= 1;
        } else {
            let from = reference[i - 1].clone();
            let to = hypothesis[j - 1].clone();
            ops.push(if from == to {
                EditOp::Keep { symbol: from }
            } else {
                EditOp::Substitute { from, to }
            });
            i -= 1;
            j -= 1;
        }
    }
    ops.reverse();

    (table[n][m], ops)
}
