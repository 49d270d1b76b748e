use ndarray::{Array1, Array2};
use rasterdim::core::processing::crop_border::{content_mask, get_crop_region};
use rasterdim::{
    BorderMode, BorderType, Color, CropMode, Error, Image, Region, ResizeCondition, Section,
    SelectMode, SideSelection, crop, crop_border, crop_to_alpha_content, find_inner_section,
    get_border_color, get_bounding_box, pad, resize_to_side, resize_to_side_dimensions,
};

fn mask(len: usize, runs: &[(usize, usize)]) -> Array1<bool> {
    Array1::from_shape_fn(len, |i| runs.iter().any(|&(s, e)| i >= s && i < e))
}

fn framed(size: usize, border: usize, channels: usize) -> Image {
    Image::from_shape_fn((size, size, channels), |(y, x, _)| {
        if y < border || x < border || y >= size - border || x >= size - border {
            1.0
        } else {
            0.0
        }
    })
}

#[test]
fn section_finder_properties() {
    let empty = Array1::from_elem(9, false);
    assert_eq!(
        find_inner_section(empty.view(), SelectMode::LargestSection),
        Section::new(0, 9)
    );

    let two = mask(16, &[(2, 5), (10, 13)]);
    assert_eq!(
        find_inner_section(two.view(), SelectMode::AllSections),
        Section::new(2, 13)
    );

    // center = 8: [4,6) is 2 away, [10,12) is 2 away
    let equidistant = mask(16, &[(4, 6), (10, 12)]);
    assert_eq!(
        find_inner_section(equidistant.view(), SelectMode::CenterSection),
        Section::new(4, 6)
    );

    let tied = mask(10, &[(0, 3), (5, 8)]);
    assert_eq!(
        find_inner_section(tied.view(), SelectMode::LargestSection),
        Section::new(0, 3)
    );
}

#[test]
fn border_crop_sizes_and_identity() {
    let img = Image::from_elem((9, 12, 3), 0.5);
    for amount in 1..4 {
        let out = crop(img.view(), CropMode::Border(amount)).unwrap();
        assert_eq!(out.dim(), (9 - 2 * amount, 12 - 2 * amount, 3));
    }
    let same = crop(img.view(), CropMode::Border(0)).unwrap();
    assert!(same.is_view());
    assert_eq!(same.as_ptr(), img.as_ptr());
}

#[test]
fn edges_crop_rejects_collapsing_axes() {
    let img = Image::zeros((6, 8, 1));
    let tall = CropMode::Edges {
        top: 3,
        right: 0,
        bottom: 3,
        left: 0,
    };
    let wide = CropMode::Edges {
        top: 0,
        right: 5,
        bottom: 0,
        left: 3,
    };
    for mode in [tall, wide] {
        assert!(matches!(
            crop(img.view(), mode),
            Err(Error::InvalidGeometry { .. })
        ));
    }
}

#[test]
fn offsets_pad_truncates_to_target() {
    let img = Image::from_elem((10, 10, 3), 0.7);
    let out = pad(
        &img.view(),
        BorderType::Black,
        Color::BLACK,
        BorderMode::Offsets {
            left: 2,
            top: 2,
            width: 8,
            height: 8,
        },
    );
    assert_eq!(out.dim(), (8, 8, 3));
}

#[test]
fn border_trim_finds_interior() {
    for channels in [1, 3] {
        let img = framed(10, 2, channels);
        let out = crop_border(&img.view(), 10.0, SelectMode::AllSections, 0).unwrap();
        assert_eq!(out.dim(), (6, 6, channels));
        assert!(out.iter().all(|&v| v == 0.0));
    }
}

#[test]
fn crop_region_of_framed_mask() {
    let img = framed(10, 2, 3);
    let mask = content_mask(&img.view(), &get_border_color(&img.view()), 0.1);
    assert_eq!(
        get_crop_region(mask.view(), SelectMode::AllSections),
        Region::new(2, 2, 6, 6)
    );
}

#[test]
fn crop_region_third_pass_trims_columns_of_chosen_rows() {
    // Largest row band is rows 5..9 whose content spans columns 4..6; the
    // column pass alone sees columns 1..7 because of the small top blob.
    let mask = Array2::from_shape_fn((10, 8), |(y, x)| {
        (y == 1 && (1..7).contains(&x)) || ((5..9).contains(&y) && (4..6).contains(&x))
    });
    assert_eq!(
        get_crop_region(mask.view(), SelectMode::LargestSection),
        Region::new(4, 5, 2, 4)
    );
}

#[test]
fn downscale_only_keeps_small_images() {
    assert_eq!(
        resize_to_side_dimensions(
            50,
            50,
            100,
            SideSelection::Width,
            ResizeCondition::Downscale
        ),
        (50, 50)
    );
    let img = Image::from_elem((50, 50, 1), 0.25);
    let out = resize_to_side(
        &img.view(),
        100,
        SideSelection::Width,
        ResizeCondition::Downscale,
        rasterdim::ResizeFilter::Lanczos,
    )
    .unwrap();
    assert_eq!(out, img);
}

#[test]
fn alpha_crop_ignores_rgb() {
    let img = Image::from_elem((5, 5, 3), 0.0);
    let out = crop_to_alpha_content(img.view(), 50.0).unwrap();
    assert!(out.is_view());
    assert_eq!(out.dim(), (5, 5, 3));
}

#[test]
fn threshold_queries_fail_when_nothing_exceeds() {
    let img = Image::from_elem((4, 4, 4), 0.3);
    assert!(matches!(
        get_bounding_box(&img.view(), 30.0),
        Err(Error::EmptyResult { .. })
    ));
    assert!(matches!(
        crop_to_alpha_content(img.view(), 30.0),
        Err(Error::EmptyResult { .. })
    ));
}
