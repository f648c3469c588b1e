use thiserror::Error;

use crate::model::car::CarListItem;

/// Raw contents of the add/edit car dialog, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarForm {
    pub company: String,
    pub model: String,
    pub price: String,
    pub description: String,
}

/// Validated car payload sent as multipart text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CarFields {
    pub company: String,
    pub model: String,
    pub price: f64,
    /// `None` when the description was left blank; the field is then omitted.
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarField {
    Company,
    Model,
    Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarFieldError {
    #[error("Company is required.")]
    MissingCompany,
    #[error("Model is required.")]
    MissingModel,
    #[error("Price must be a number.")]
    PriceNotANumber,
    #[error("Price must be greater than zero.")]
    NonPositivePrice,
}

impl CarFieldError {
    pub fn field(&self) -> CarField {
        match self {
            CarFieldError::MissingCompany => CarField::Company,
            CarFieldError::MissingModel => CarField::Model,
            CarFieldError::PriceNotANumber | CarFieldError::NonPositivePrice => CarField::Price,
        }
    }
}

impl CarForm {
    /// Prefills the dialog from a listed car for editing.
    pub fn from_item(item: &CarListItem) -> Self {
        Self {
            company: item.company.clone(),
            model: item.model.clone(),
            price: item.price.to_string(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    /// Trims every field and checks the required ones.
    ///
    /// All failing fields are reported at once so the dialog can mark each of
    /// them.
    pub fn validate(&self) -> Result<CarFields, Vec<CarFieldError>> {
        let mut errors = Vec::new();

        let company = self.company.trim();
        if company.is_empty() {
            errors.push(CarFieldError::MissingCompany);
        }
        let model = self.model.trim();
        if model.is_empty() {
            errors.push(CarFieldError::MissingModel);
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(price) if !price.is_finite() => {
                errors.push(CarFieldError::PriceNotANumber);
                0.0
            }
            Ok(price) if price <= 0.0 => {
                errors.push(CarFieldError::NonPositivePrice);
                price
            }
            Ok(price) => price,
            Err(_) => {
                errors.push(CarFieldError::PriceNotANumber);
                0.0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let description = self.description.trim();
        Ok(CarFields {
            company: company.to_string(),
            model: model.to_string(),
            price,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(company: &str, model: &str, price: &str, description: &str) -> CarForm {
        CarForm {
            company: company.into(),
            model: model.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    #[test]
    fn trims_and_accepts_a_complete_form() {
        let fields = form("  Honda ", " Civic", " 18500.50 ", "  one owner ")
            .validate()
            .unwrap();
        assert_eq!(fields.company, "Honda");
        assert_eq!(fields.model, "Civic");
        assert_eq!(fields.price, 18500.5);
        assert_eq!(fields.description.as_deref(), Some("one owner"));
    }

    #[test]
    fn blank_description_is_omitted() {
        let fields = form("Audi", "Wagon", "1", "   ").validate().unwrap();
        assert!(fields.description.is_none());
    }

    #[test]
    fn non_positive_price_is_rejected() {
        for price in ["0", "-10", "0.0"] {
            let errors = form("Audi", "Wagon", price, "").validate().unwrap_err();
            assert_eq!(errors, vec![CarFieldError::NonPositivePrice]);
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = CarForm::default().validate().unwrap_err();
        let fields: Vec<CarField> = errors.iter().map(CarFieldError::field).collect();
        assert_eq!(fields, vec![CarField::Company, CarField::Model, CarField::Price]);
        assert!(errors.contains(&CarFieldError::PriceNotANumber));
    }

    #[test]
    fn non_numeric_and_infinite_prices_are_rejected() {
        for price in ["abc", "inf", "NaN", ""] {
            let errors = form("Kia", "SUV", price, "").validate().unwrap_err();
            assert_eq!(errors, vec![CarFieldError::PriceNotANumber], "price {price:?}");
        }
    }

    #[test]
    fn edit_prefill_round_trips_through_validation() {
        let item = CarListItem {
            id: 3,
            company: "BMW".into(),
            model: "Coupe 4".into(),
            price: 43000.0,
            description: None,
            has_image: false,
            image_data_url: None,
        };
        let prefilled = CarForm::from_item(&item);
        assert_eq!(prefilled.price, "43000");
        let fields = prefilled.validate().unwrap();
        assert_eq!(fields.price, 43000.0);
        assert_eq!(fields.company, "BMW");
    }
}
