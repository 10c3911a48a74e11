//! The reviews list.

use std::cmp::Ordering;

use crate::list::{
    self, all_of_filter, compare_numbers, compare_strings, descending, group_letter,
    range_filter, text_filter, FilterKey, FilterValue, FilterValues, Filters, ListAction,
    ListKind, ListState, Sorter,
};
use crate::models::Title;
use crate::{filter_keys, sort_keys};

sort_keys! {
    /// Orderings offered on the reviews list
    pub enum TitleSort {
        TitleAsc => "title-asc",
        TitleDesc => "title-desc",
        GradeDesc => "grade-desc",
        GradeAsc => "grade-asc",
        ReleaseDateDesc => "release-date-desc",
        ReleaseDateAsc => "release-date-asc",
        ReviewDateDesc => "review-date-desc",
        ReviewDateAsc => "review-date-asc",
    }
}

filter_keys! {
    pub enum TitleFilter {
        Title => "title" as Text,
        Genres => "genres" as AllOf,
        /// Bounds are grade values (F = 1 through A+ = 13)
        Grade => "grade" as Range,
        ReleaseYear => "release-year" as Range,
        ReviewYear => "review-year" as Range,
    }
}

pub type TitlesState = ListState<TitleFilter, TitleSort>;
pub type TitlesAction = ListAction<TitleFilter, TitleSort>;

pub struct Titles;

fn by_title(a: &Title, b: &Title) -> Ordering {
    compare_strings(&a.sort_title, &b.sort_title)
}

fn by_grade(a: &Title, b: &Title) -> Ordering {
    compare_numbers(a.grade.value(), b.grade.value())
}

fn by_release_date(a: &Title, b: &Title) -> Ordering {
    compare_strings(&a.release_year, &b.release_year)
}

fn by_review_date(a: &Title, b: &Title) -> Ordering {
    compare_numbers(a.review_date, b.review_date)
}

impl ListKind for Titles {
    type Record = Title;
    type Filter = TitleFilter;
    type Sort = TitleSort;

    const DEFAULT_SORT: TitleSort = TitleSort::ReviewDateDesc;

    fn sorter() -> Sorter<Title, TitleSort> {
        Sorter::new()
            .with(TitleSort::TitleAsc, by_title)
            .with(TitleSort::TitleDesc, descending(by_title))
            .with(TitleSort::GradeAsc, by_grade)
            .with(TitleSort::GradeDesc, descending(by_grade))
            .with(TitleSort::ReleaseDateAsc, by_release_date)
            .with(TitleSort::ReleaseDateDesc, descending(by_release_date))
            .with(TitleSort::ReviewDateAsc, by_review_date)
            .with(TitleSort::ReviewDateDesc, descending(by_review_date))
            .with_fallback(by_title)
    }

    fn build_filters(values: &FilterValues<TitleFilter>) -> Filters<Title> {
        let get = |key: TitleFilter| values.get(&key);
        Filters::new()
            .with(
                TitleFilter::Title.name(),
                text_filter(
                    get(TitleFilter::Title).and_then(FilterValue::as_text),
                    |title: &Title| title.title.as_str(),
                ),
            )
            .with(
                TitleFilter::Genres.name(),
                all_of_filter(
                    get(TitleFilter::Genres).and_then(FilterValue::as_all_of),
                    |title: &Title| title.genres.as_slice(),
                ),
            )
            .with(
                TitleFilter::Grade.name(),
                range_filter(
                    get(TitleFilter::Grade).and_then(FilterValue::as_range),
                    |title: &Title| Some(title.grade.value()),
                ),
            )
            .with(
                TitleFilter::ReleaseYear.name(),
                range_filter(
                    get(TitleFilter::ReleaseYear).and_then(FilterValue::as_range),
                    Title::release_year_number,
                ),
            )
            .with(
                TitleFilter::ReviewYear.name(),
                range_filter(
                    get(TitleFilter::ReviewYear).and_then(FilterValue::as_range),
                    |title: &Title| Some(title.review_year()),
                ),
            )
    }

    fn group_for_sort(title: &Title, sort: &TitleSort) -> String {
        match sort {
            TitleSort::TitleAsc | TitleSort::TitleDesc => group_letter(&title.sort_title).to_string(),
            TitleSort::GradeAsc | TitleSort::GradeDesc => title.grade.to_string(),
            TitleSort::ReleaseDateAsc | TitleSort::ReleaseDateDesc => title.release_year.clone(),
            TitleSort::ReviewDateAsc | TitleSort::ReviewDateDesc => {
                title.review_date.format("%B %Y").to_string()
            }
        }
    }
}

pub fn initial_state() -> TitlesState {
    Titles::initial_state()
}

pub fn reducer(state: TitlesState, action: TitlesAction) -> TitlesState {
    list::reducer(state, action)
}
