use std::collections::HashSet;

use common::carousel::Carousel;
use common::counter::{CountUp, CountUpPhase};
use common::forms::{
    FormError, FormType, GridColumn, get_field_by_name, get_fields_by_column, get_form_config,
    get_form_redirect_url, get_form_types, get_required_fields, is_valid_form_type,
};
use common::portfolio::{PortfolioProject, catalog, filter_projects};

#[test]
fn registry_is_total_and_closed() {
    for form_type in get_form_types() {
        assert_eq!(get_form_config(form_type).unwrap().id, form_type);
        assert!(is_valid_form_type(form_type.as_str()));
    }
    assert!(!is_valid_form_type("bogus"));
    assert_eq!(
        "bogus".parse::<FormType>(),
        Err(FormError::UnknownFormType("bogus".to_string()))
    );
}

#[test]
fn columns_partition_the_fields() {
    for form_type in get_form_types() {
        let config = get_form_config(form_type).unwrap();
        let mut seen = HashSet::new();
        let mut total = 0;
        for column in [GridColumn::One, GridColumn::Two, GridColumn::Full] {
            for field in get_fields_by_column(form_type, column).unwrap() {
                assert!(seen.insert(field.name), "{} counted twice", field.name);
                total += 1;
            }
        }
        assert_eq!(total, config.fields.len(), "{}", form_type);
    }
}

#[test]
fn required_fields_are_exactly_the_flagged_ones() {
    for form_type in get_form_types() {
        let config = get_form_config(form_type).unwrap();
        let expected: Vec<_> = config.fields.iter().filter(|f| f.required).collect();
        assert_eq!(get_required_fields(form_type).unwrap(), expected);
    }
}

#[test]
fn field_lookup_round_trips() {
    for form_type in get_form_types() {
        let config = get_form_config(form_type).unwrap();
        for field in config.fields {
            assert_eq!(get_field_by_name(form_type, field.name).unwrap(), Some(field));
        }
        assert_eq!(get_field_by_name(form_type, "doesNotExist").unwrap(), None);
    }
}

#[test]
fn redirect_urls_follow_redirect_type() {
    assert_eq!(
        get_form_redirect_url(FormType::SeoAudit).unwrap(),
        "/thank-you?type=seoAudit"
    );
    for form_type in get_form_types() {
        let config = get_form_config(form_type).unwrap();
        assert_eq!(
            get_form_redirect_url(form_type).unwrap(),
            format!("/thank-you?type={}", config.redirect_type)
        );
    }
}

#[test]
fn config_serializes_with_wire_names() {
    let json = serde_json::to_value(get_form_config(FormType::SeoAudit).unwrap()).unwrap();
    assert_eq!(json["id"], "seoAudit");
    assert_eq!(json["redirectType"], "seoAudit");
    assert_eq!(json["fields"][0]["type"], "text");
    assert_eq!(json["fields"][0]["gridColumn"], "1");
    assert!(json["fields"][0].get("options").is_none());
    assert_eq!(json["successMessage"]["title"], "Your SEO audit is on its way!");
}

#[test]
fn category_filter_on_catalog() {
    let projects = catalog();
    assert_eq!(filter_projects(&projects, "all").len(), projects.len());
    assert!(filter_projects(&projects, "Podcast").is_empty());
    let lower = filter_projects(&projects, "web design");
    assert!(!lower.is_empty());
    assert!(lower.iter().all(|p| p.services.iter().any(|s| s == "Web Design")));
}

#[test]
fn carousel_walk_stays_in_range_and_next_prev_cancel() {
    let mut carousel = Carousel::for_images(&["a", "b", "c", "d"]).unwrap();
    let script = [0u8, 0, 1, 2, 0, 1, 1, 1, 2, 0, 0, 0, 0, 1];
    for (i, op) in script.iter().enumerate() {
        let before = carousel.current();
        match op {
            0 => {
                carousel.next();
                assert_eq!(carousel.prev(), before);
                carousel.next();
            }
            1 => {
                carousel.prev();
                assert_eq!(carousel.next(), before);
                carousel.prev();
            }
            _ => {
                carousel.jump_to(i % carousel.len()).unwrap();
            }
        }
        assert!(carousel.current() < carousel.len());
    }
}

#[test]
fn counter_run_is_monotone_exact_and_fires_once() {
    let mut counter = CountUp::new(2_500);
    assert!(counter.on_visible());
    let mut last = counter.value();
    while counter.tick() {
        assert!(counter.value() >= last);
        last = counter.value();
        assert!(!counter.on_visible());
    }
    assert_eq!(counter.value(), 2_500);
    assert!(!counter.on_visible());
    assert_eq!(counter.phase(), CountUpPhase::Settled);
}

#[test]
fn degenerate_gallery_never_reaches_the_carousel() {
    let projects = vec![
        PortfolioProject {
            id: 1,
            name: "One".into(),
            description: String::new(),
            industry: "Retail".into(),
            services: vec!["Web Design".into(), "SEO".into()],
            image: "one.jpg".into(),
            images: vec!["a.jpg".into(), "b.jpg".into()],
            website_url: None,
        },
        PortfolioProject {
            id: 2,
            name: "Two".into(),
            description: String::new(),
            industry: "Food".into(),
            services: vec!["Branding".into()],
            image: "two.jpg".into(),
            images: vec![],
            website_url: None,
        },
    ];

    let branding = filter_projects(&projects, "Branding");
    assert_eq!(branding.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

    let images = branding[0].display_images();
    assert_eq!(images, vec!["two.jpg".to_string()]);
    let carousel = Carousel::for_images(&images).unwrap();
    assert!(!carousel.has_controls());
    assert_eq!(carousel.current(), 0);
}
