use crate::error::{Error, Result};

use std::ops::Index;


/// A row of the data file.
/// Each value is compared by exact string match.
pub type Record = Vec<String>;


/// The ordered attribute names of a data file
/// together with the position of the decision column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    names: Vec<String>,
    decision_index: usize,
}


impl Schema {
    /// Construct a new instance of [`Schema`].
    /// 
    /// Note that only the attributes placed before `decision_index`
    /// are candidates for splitting.
    pub fn new<S>(names: Vec<S>, decision_index: usize) -> Result<Self>
        where S: Into<String>
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if decision_index >= names.len() {
            return Err(Error::Parameters(format!(
                "decision index {decision_index} is out of the schema \
                 with {} attributes",
                names.len()
            )));
        }

        Ok(Self { names, decision_index, })
    }


    /// Construct a [`Schema`] whose decision column is the last one.
    pub fn with_last_decision<S>(names: Vec<S>) -> Result<Self>
        where S: Into<String>
    {
        let names = names.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let decision_index = names.len().checked_sub(1)
            .ok_or_else(|| {
                Error::Parameters("the schema has no attribute".to_string())
            })?;
        Self::new(names, decision_index)
    }


    /// Returns the attribute names.
    pub fn names(&self) -> &[String] {
        &self.names[..]
    }


    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }


    /// Returns `true` if the schema has no column.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }


    /// Returns the position of the decision column.
    pub fn decision_index(&self) -> usize {
        self.decision_index
    }


    /// Returns the name of the decision column.
    pub fn decision_name(&self) -> &str {
        &self.names[self.decision_index]
    }


    /// Returns the position of the attribute named `name`.
    /// The first occurrence wins if the names are duplicated.
    pub fn position<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        let name = name.as_ref();
        self.names.iter().position(|n| n == name)
    }


    /// Returns the position of the attribute named `name`,
    /// or `Error::UnknownAttribute` if it does not exist.
    pub fn try_position<S: AsRef<str>>(&self, name: S) -> Result<usize> {
        let name = name.as_ref();
        self.position(name)
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
    }


    /// Returns the attributes that are candidates for splitting,
    /// i.e., the attributes before the decision column.
    pub fn attributes(&self) -> &[String] {
        &self.names[..self.decision_index]
    }
}


impl Index<usize> for Schema {
    type Output = String;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.names[idx]
    }
}


/// A collection of [`Record`]s sharing one [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Record>,
}


impl Dataset {
    /// Construct a new instance of [`Dataset`].
    /// This method returns `Error::SchemaMismatch`
    /// if a row does not have one value per schema column.
    /// The line numbers in the error are 1-indexed row positions.
    pub fn new(schema: Schema, rows: Vec<Record>) -> Result<Self> {
        let expected = schema.len();
        if let Some((i, row)) = rows.iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(Error::SchemaMismatch {
                line: i + 1,
                expected,
                found: row.len(),
            });
        }

        Ok(Self { schema, rows })
    }


    /// Returns the schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the rows.
    pub fn rows(&self) -> &[Record] {
        &self.rows[..]
    }


    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if the dataset has no row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Consumes `self` and returns the schema and the rows.
    pub fn into_parts(self) -> (Schema, Vec<Record>) {
        (self.schema, self.rows)
    }
}


impl Index<usize> for Dataset {
    type Output = Record;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx]
    }
}
