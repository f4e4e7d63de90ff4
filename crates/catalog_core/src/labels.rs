use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::{domain::ProductField, error::CatalogError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Locale::En),
            "ar" | "arabic" => Ok(Locale::Ar),
            other => Err(CatalogError::validation(format!("unsupported locale '{other}'"))),
        }
    }
}

/// User-facing text of the admin screen. Values such as `$` and category
/// names are not localized.
#[derive(Debug, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub add_new: &'static str,
    pub total_listings: &'static str,
    pub col_index: &'static str,
    pub col_id: &'static str,
    pub col_image: &'static str,
    pub col_name: &'static str,
    pub col_price: &'static str,
    pub col_owner: &'static str,
    pub col_actions: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub empty: &'static str,
    pub form_create: &'static str,
    pub form_update: &'static str,
    pub field_name: &'static str,
    pub field_price: &'static str,
    pub field_owner: &'static str,
    pub field_category: &'static str,
    pub field_description: &'static str,
    pub field_image: &'static str,
    pub image_notice: &'static str,
    pub save: &'static str,
    pub confirm_delete: &'static str,
}

static EN: Labels = Labels {
    title: "Control Panel",
    subtitle: "Manage listings and users",
    add_new: "Add listing",
    total_listings: "Total listings",
    col_index: "#",
    col_id: "ID",
    col_image: "Image",
    col_name: "Name",
    col_price: "Price",
    col_owner: "Owner",
    col_actions: "Actions",
    edit: "Edit",
    delete: "Delete",
    empty: "No listings yet",
    form_create: "Add new listing",
    form_update: "Edit listing",
    field_name: "Product name",
    field_price: "Price ($)",
    field_owner: "Listing owner",
    field_category: "Category",
    field_description: "Description",
    field_image: "Image",
    image_notice: "A default image will be used",
    save: "Save",
    confirm_delete: "Are you sure you want to delete this listing?",
};

static AR: Labels = Labels {
    title: "لوحة التحكم",
    subtitle: "إدارة المنتجات والمستخدمين",
    add_new: "إضافة إعلان",
    total_listings: "إجمالي الإعلانات",
    col_index: "#",
    col_id: "المعرّف",
    col_image: "الصورة",
    col_name: "اسم السلاح",
    col_price: "السعر",
    col_owner: "صاحب الإعلان",
    col_actions: "العمليات",
    edit: "تعديل",
    delete: "حذف",
    empty: "لا توجد إعلانات حالياً",
    form_create: "إضافة إعلان جديد",
    form_update: "تعديل الإعلان",
    field_name: "اسم المنتج",
    field_price: "السعر ($)",
    field_owner: "صاحب الإعلان",
    field_category: "التصنيف",
    field_description: "الوصف",
    field_image: "الصورة",
    image_notice: "سيتم استخدام صورة افتراضية",
    save: "حفظ",
    confirm_delete: "هل أنت متأكد من حذف هذا الإعلان؟",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Ar => &AR,
        }
    }

    pub fn field(&self, field: ProductField) -> &'static str {
        match field {
            ProductField::Name => self.field_name,
            ProductField::Price => self.field_price,
            ProductField::Category => self.field_category,
            ProductField::Image => self.field_image,
            ProductField::Description => self.field_description,
            ProductField::Owner => self.field_owner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!("AR".parse::<Locale>().expect("locale"), Locale::Ar);
        assert_eq!("en".parse::<Locale>().expect("locale"), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn arabic_labels_keep_original_confirmation_text() {
        let labels = Labels::for_locale(Locale::Ar);
        assert_eq!(labels.confirm_delete, "هل أنت متأكد من حذف هذا الإعلان؟");
        assert_eq!(labels.field(ProductField::Owner), "صاحب الإعلان");
    }
}
