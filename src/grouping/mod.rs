pub mod buckets;
pub mod rules;

pub use buckets::{
    available_years, group_by_category, group_by_sub_category, group_by_year, CategoryBucket,
    YearlyBuckets,
};
pub use rules::{classify, SubCategory, SubCategoryRule, SUB_CATEGORY_RULES};
