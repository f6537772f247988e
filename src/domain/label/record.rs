// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/record.rs
//
// Sender and recipient address records.

use crate::domain::error::ValidationError;

/// Fixed sender printed on every label.
pub const SENDER_NAME: &str = "شرکت هوش مصنوعی اندیشمندان برتر";
pub const SENDER_ADDRESS: &str = "شیراز،شهرک آرین بلوار سفیر امید ۲، کوچه ۲/۶";
pub const SENDER_POSTAL_CODE: &str = "۷۱۴۵۶۸۳۲۱۰";
pub const SENDER_PHONE: &str = "۰۲۱۹۱۰۹۱۷۲۲";

/// A postal address block: name, address, postal code, phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    pub name: String,
    /// May span several lines; line breaks are treated as spaces on the label.
    pub address: String,
    pub postal_code: String,
    pub phone: String,
}

impl AddressRecord {
    /// Build a record, trimming surrounding whitespace from every field.
    pub fn new(
        name: impl AsRef<str>,
        address: impl AsRef<str>,
        postal_code: impl AsRef<str>,
        phone: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_owned(),
            address: address.as_ref().trim().to_owned(),
            postal_code: postal_code.as_ref().trim().to_owned(),
            phone: phone.as_ref().trim().to_owned(),
        }
    }

    /// The constant sender record.
    #[must_use]
    pub fn sender() -> Self {
        Self::new(SENDER_NAME, SENDER_ADDRESS, SENDER_POSTAL_CODE, SENDER_PHONE)
    }

    /// Demonstration recipient used to pre-fill the form.
    #[must_use]
    pub fn sample_recipient() -> Self {
        Self::new(
            "علی رضا شجاع",
            "گناوه خیابان آزادی، پلاک ۱۲۳، واحد ۴",
            "۵۴۶۵۴۶۵۴۶۵",
            "۰۹۱۷۷۰۱۲۱۵۴",
        )
    }

    /// Fill empty fields from `other`, keeping anything already entered.
    pub fn fill_missing_from(&mut self, other: &Self) {
        let pairs = [
            (&mut self.name, &other.name),
            (&mut self.address, &other.address),
            (&mut self.postal_code, &other.postal_code),
            (&mut self.phone, &other.phone),
        ];
        for (field, fallback) in pairs {
            if field.trim().is_empty() {
                field.clone_from(fallback);
            }
        }
    }

    /// Check the fields a recipient must have. Phone is optional.
    pub fn validate_recipient(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::MissingAddress);
        }
        if self.postal_code.trim().is_empty() {
            return Err(ValidationError::MissingPostalCode);
        }
        Ok(())
    }

    /// Address with every run of whitespace (line breaks included) collapsed.
    #[must_use]
    pub fn address_single_line(&self) -> String {
        self.address.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Plain-text report of the record, as saved by `--save-info`.
    #[must_use]
    pub fn to_report(&self) -> String {
        format!(
            "اطلاعات گیرنده:\n{}\nنام: {}\nآدرس: {}\nکدپستی: {}\nتلفن: {}\n",
            "=".repeat(30),
            self.name,
            self.address,
            self.postal_code,
            self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ali() -> AddressRecord {
        AddressRecord::new("Ali", "123 Main St", "12345", "")
    }

    #[test]
    fn test_new_trims_fields() {
        let record = AddressRecord::new("  Ali ", "\n123 Main St\t", " 12345", " 0912 ");
        assert_eq!(record.name, "Ali");
        assert_eq!(record.address, "123 Main St");
        assert_eq!(record.postal_code, "12345");
        assert_eq!(record.phone, "0912");
    }

    #[test]
    fn test_phone_is_optional() {
        assert_eq!(ali().validate_recipient(), Ok(()));
    }

    #[test]
    fn test_each_required_field_blocks_independently() {
        let mut no_name = ali();
        no_name.name = "   ".into();
        assert_eq!(no_name.validate_recipient(), Err(ValidationError::MissingName));

        let mut no_address = ali();
        no_address.address = "\n".into();
        assert_eq!(no_address.validate_recipient(), Err(ValidationError::MissingAddress));

        let mut no_postal = ali();
        no_postal.postal_code.clear();
        assert_eq!(no_postal.validate_recipient(), Err(ValidationError::MissingPostalCode));
    }

    #[test]
    fn test_default_record_is_invalid() {
        assert_eq!(
            AddressRecord::default().validate_recipient(),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn test_fill_missing_keeps_entered_values() {
        let mut record = AddressRecord::new("Ali", "", "", "");
        record.fill_missing_from(&AddressRecord::sample_recipient());
        assert_eq!(record.name, "Ali");
        assert_eq!(record.postal_code, "۵۴۶۵۴۶۵۴۶۵");
        assert!(record.validate_recipient().is_ok());
    }

    #[test]
    fn test_address_single_line() {
        let record = AddressRecord::new("a", "Line one\n  line two\r\nthree", "1", "");
        assert_eq!(record.address_single_line(), "Line one line two three");
    }

    #[test]
    fn test_report_layout() {
        let report = ali().to_report();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "=".repeat(30));
        assert_eq!(lines[2], "نام: Ali");
        assert_eq!(lines[5], "تلفن: ");
    }

    #[test]
    fn test_sender_is_complete() {
        assert!(AddressRecord::sender().validate_recipient().is_ok());
    }
}
