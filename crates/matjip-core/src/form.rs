//! Entry Form Controller
//!
//! Owns one draft's text fields and a busy flag, and drives a submission:
//! validate, hand the draft to the caller's create future, then reset.

use std::future::Future;

use log::debug;

use crate::domain::{Category, PlaceDraft};
use crate::error::FormError;

/// Form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Price,
    Category,
    Description,
    Link,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Price,
        FormField::Category,
        FormField::Description,
        FormField::Link,
        FormField::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "맛집 이름",
            FormField::Price => "가격",
            FormField::Category => "카테고리",
            FormField::Description => "설명",
            FormField::Link => "링크",
            FormField::Image => "이미지 URL",
        }
    }
}

/// Raw text of every input; price stays text until submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceFormFields {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub link: String,
    pub image: String,
}

impl PlaceFormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::Description => &self.description,
            FormField::Link => &self.link,
            FormField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Category => &mut self.category,
            FormField::Description => &mut self.description,
            FormField::Link => &mut self.link,
            FormField::Image => &mut self.image,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Validate and convert. Every field is required; URLs are not checked.
    pub fn to_draft(&self) -> Result<PlaceDraft, FormError> {
        if let Some(missing) = FormField::ALL
            .iter()
            .find(|f| self.get(**f).trim().is_empty())
        {
            return Err(FormError::MissingField(*missing));
        }

        let category = Category::from_label(self.category.trim())
            .ok_or_else(|| FormError::UnknownCategory(self.category.clone()))?;

        Ok(PlaceDraft {
            name: self.name.trim().to_string(),
            price: parse_price(&self.price)?,
            category,
            description: self.description.clone(),
            link: self.link.trim().to_string(),
            image: self.image.trim().to_string(),
        })
    }
}

/// Decimal digits with an optional fractional part, truncated toward zero.
/// Signs, exponents, separators and anything else are rejected.
pub fn parse_price(text: &str) -> Result<u64, FormError> {
    let invalid = || FormError::InvalidPrice(text.to_string());
    let trimmed = text.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    whole.parse::<u64>().map_err(|_| invalid())
}

/// Storage for the form's fields and busy flag
pub trait FormSlots {
    fn fields(&self) -> PlaceFormFields;
    fn set_fields(&self, fields: PlaceFormFields);
    fn is_submitting(&self) -> bool;
    fn set_submitting(&self, submitting: bool);
}

/// Clears every field and the busy flag when dropped
struct SubmitGuard<'a, S: FormSlots> {
    slots: &'a S,
}

impl<'a, S: FormSlots> SubmitGuard<'a, S> {
    fn acquire(slots: &'a S) -> Self {
        slots.set_submitting(true);
        Self { slots }
    }
}

impl<S: FormSlots> Drop for SubmitGuard<'_, S> {
    fn drop(&mut self) {
        self.slots.set_fields(PlaceFormFields::default());
        self.slots.set_submitting(false);
    }
}

pub struct PlaceForm<S> {
    slots: S,
}

impl<S: FormSlots> PlaceForm<S> {
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn update(&self, field: FormField, value: String) {
        let mut fields = self.slots.fields();
        fields.set(field, value);
        self.slots.set_fields(fields);
    }

    pub fn is_submitting(&self) -> bool {
        self.slots.is_submitting()
    }

    /// Submit the current fields through `create`.
    ///
    /// Once started, the fields are cleared and the busy flag dropped however
    /// the submission ends, including a rejected draft (then `create` is never
    /// called). Only a submission refused as `Busy` leaves state alone.
    pub async fn submit<F, Fut, T>(&self, create: F) -> Result<T, FormError>
    where
        F: FnOnce(PlaceDraft) -> Fut,
        Fut: Future<Output = T>,
    {
        if self.slots.is_submitting() {
            return Err(FormError::Busy);
        }
        let _guard = SubmitGuard::acquire(&self.slots);

        let draft = self.slots.fields().to_draft()?;
        debug!("[FORM] submitting {:?}", draft.name);
        Ok(create(draft).await)
    }
}
