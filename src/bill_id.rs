use crate::error::IngestError;
use crate::parser::DocumentKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillType {
    HouseBill,
    SenateBill,
    HouseConcurrentResolution,
    HouseJointResolution,
    HouseResolution,
    SenateConcurrentResolution,
    SenateJointResolution,
    SenateResolution,
}

const BILL_TYPES: &[(BillType, &str, &str)] = &[
    (BillType::HouseBill, "house_bill", "hr"),
    (BillType::SenateBill, "senate_bill", "s"),
    (
        BillType::HouseConcurrentResolution,
        "house_concurrent_resolution",
        "hconres",
    ),
    (
        BillType::HouseJointResolution,
        "house_joint_resolution",
        "hjres",
    ),
    (BillType::HouseResolution, "house_resolution", "hres"),
    (
        BillType::SenateConcurrentResolution,
        "senate_concurrent_resolution",
        "sconres",
    ),
    (
        BillType::SenateJointResolution,
        "senate_joint_resolution",
        "sjres",
    ),
    (BillType::SenateResolution, "senate_resolution", "sres"),
];

impl BillType {
    pub fn from_name(name: &str) -> Option<Self> {
        BILL_TYPES
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(bill_type, _, _)| *bill_type)
    }

    pub fn name(self) -> &'static str {
        BILL_TYPES
            .iter()
            .find(|(bill_type, _, _)| *bill_type == self)
            .map(|(_, name, _)| *name)
            .unwrap_or_default()
    }

    /// Path segment used by the Congress.gov API.
    pub fn api_code(self) -> &'static str {
        BILL_TYPES
            .iter()
            .find(|(bill_type, _, _)| *bill_type == self)
            .map(|(_, _, code)| *code)
            .unwrap_or_default()
    }

    /// Joint resolutions are published with a `bill` root like ordinary bills.
    pub fn expected_kind(self) -> DocumentKind {
        match self {
            BillType::HouseBill
            | BillType::SenateBill
            | BillType::HouseJointResolution
            | BillType::SenateJointResolution => DocumentKind::Bill,
            BillType::HouseConcurrentResolution
            | BillType::HouseResolution
            | BillType::SenateConcurrentResolution
            | BillType::SenateResolution => DocumentKind::Resolution,
        }
    }
}

/// A bill identifier such as `house_bill-30-119` (type, number, congress).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillId {
    pub bill_type: BillType,
    pub number: u32,
    pub congress: u32,
}

impl BillId {
    pub fn parse(value: &str) -> Result<Self, IngestError> {
        let invalid = || IngestError::InvalidBillId(value.to_string());
        let parts = value.split('-').collect::<Vec<_>>();
        if parts.len() < 3 {
            return Err(invalid());
        }

        let bill_type = BillType::from_name(parts[0]).ok_or_else(invalid)?;
        let number = parse_positive(parts[1]).ok_or_else(invalid)?;
        let congress = parse_positive(parts[2]).ok_or_else(invalid)?;

        Ok(Self {
            bill_type,
            number,
            congress,
        })
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.bill_type.name(),
            self.number,
            self.congress
        )
    }
}
