//! Defines the entropic splitting criterion of the ID3 algorithm.
use crate::Record;
use crate::common::checker;


/// Binary entropy (in bits) of a set with
/// `positive` positive rows and `negative` negative rows
/// out of `total` rows.
///
/// A class with no row does not contribute to the entropy,
/// so a pure set has zero entropy.
#[inline]
pub fn entropy(total: usize, positive: usize, negative: usize) -> f64 {
    let total = total as f64;
    let mut value = 0f64;
    if positive > 0 {
        let p = positive as f64 / total;
        value -= p * p.log2();
    }
    if negative > 0 {
        let p = negative as f64 / total;
        value -= p * p.log2();
    }
    value
}


/// Entropy of the decision column over `rows`.
/// Rows labeled neither `positive` nor `negative` are only counted
/// in the total.
pub fn total_entropy(
    rows: &[Record],
    positive: &str,
    negative: &str,
    decision_index: usize,
) -> f64
{
    let (mut n_positive, mut n_negative) = (0_usize, 0_usize);
    for row in rows {
        let label = row[decision_index].as_str();
        if label == positive {
            n_positive += 1;
        } else if label == negative {
            n_negative += 1;
        }
    }
    entropy(rows.len(), n_positive, n_negative)
}


/// Information gain of a single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeGain {
    /// Name of the attribute.
    pub attribute: String,
    /// Position of the attribute in the schema.
    pub index: usize,
    /// Reduction of the entropy by a split on this attribute.
    pub gain: f64,
    /// Number of positive rows over all values of the attribute.
    pub positive: usize,
    /// Number of non-positive rows over all values of the attribute.
    pub negative: usize,
}


/// The information gain of each splitting candidate,
/// in schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InformationGainTable {
    gains: Vec<AttributeGain>,
}


impl InformationGainTable {
    /// Returns the gain of the attribute named `attribute`.
    pub fn get<S: AsRef<str>>(&self, attribute: S) -> Option<&AttributeGain> {
        let attribute = attribute.as_ref();
        self.gains.iter()
            .find(|g| g.attribute == attribute)
    }


    /// Returns the attribute with the strictly maximal gain.
    /// The first attribute in schema order wins ties.
    /// Returns `None` if no attribute has a gain greater than `0`.
    pub fn best(&self) -> Option<&AttributeGain> {
        let mut best: Option<&AttributeGain> = None;
        let mut max_gain = 0f64;
        for gain in self.gains.iter() {
            if gain.gain > max_gain {
                max_gain = gain.gain;
                best = Some(gain);
            }
        }
        best
    }


    /// Returns an iterator over the gains in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeGain> + '_ {
        self.gains.iter()
    }


    /// Returns the number of attributes in the table.
    pub fn len(&self) -> usize {
        self.gains.len()
    }


    /// Returns `true` if there is no splitting candidate.
    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }
}


/// Computes the information gain of every attribute placed
/// before `decision_index`.
/// Within each value of an attribute, the rows not labeled `positive`
/// count as negative.
///
/// `rows` must not be empty.
pub fn information_gain(
    attributes: &[String],
    base_entropy: f64,
    rows: &[Record],
    positive: &str,
    decision_index: usize,
) -> InformationGainTable
{
    checker::check_rows(rows);

    let total = rows.len() as f64;
    let n_candidates = decision_index.min(attributes.len());

    let gains = (0..n_candidates).map(|index| {
            let counts = value_counts(rows, index, positive, decision_index);

            let mut gain = base_entropy;
            let (mut n_positive, mut n_negative) = (0_usize, 0_usize);
            for &(_, (pos, neg)) in counts.iter() {
                n_positive += pos;
                n_negative += neg;
                let size = pos + neg;
                gain -= (size as f64 / total) * entropy(size, pos, neg);
            }

            AttributeGain {
                attribute: attributes[index].clone(),
                index,
                // Rounding errors must not produce a negative gain.
                gain: gain.max(0f64),
                positive: n_positive,
                negative: n_negative,
            }
        })
        .collect::<Vec<_>>();

    InformationGainTable { gains }
}


/// Counts the positive/non-positive rows for each value
/// of the attribute at `index`.
/// The values are listed in the order of their first appearance,
/// so the gain is summed in the same order on every call.
fn value_counts<'a>(
    rows: &'a [Record],
    index: usize,
    positive: &str,
    decision_index: usize,
) -> Vec<(&'a str, (usize, usize))>
{
    let mut counts: Vec<(&str, (usize, usize))> = Vec::new();
    for row in rows {
        let value = row[index].as_str();
        let k = match counts.iter().position(|(v, _)| *v == value) {
            Some(k) => k,
            None => {
                counts.push((value, (0, 0)));
                counts.len() - 1
            },
        };
        let count = &mut counts[k].1;
        if row[decision_index] == positive {
            count.0 += 1;
        } else {
            count.1 += 1;
        }
    }
    counts
}
