//! Coarse national boundaries as open `[lon, lat]` polylines, drawn over
//! the land fill.

pub(crate) struct CountryBorder {
    pub name: &'static str,
    pub line: &'static [[f32; 2]],
}

pub(crate) const COUNTRY_BORDERS: &[CountryBorder] = &[
    CountryBorder {
        name: "us_canada",
        line: &[
            [-123.0, 49.0],
            [-95.2, 49.0],
            [-89.6, 48.0],
            [-84.5, 46.5],
            [-82.5, 45.3],
            [-82.4, 42.9],
            [-79.0, 43.3],
            [-74.7, 45.0],
            [-71.5, 45.0],
            [-69.2, 47.4],
            [-67.8, 45.7],
            [-67.0, 44.8],
        ],
    },
    CountryBorder {
        name: "alaska_canada",
        line: &[
            [-141.0, 69.6],
            [-141.0, 60.3],
            [-137.5, 58.9],
            [-133.5, 57.0],
            [-130.0, 55.0],
        ],
    },
    CountryBorder {
        name: "us_mexico",
        line: &[
            [-117.1, 32.5],
            [-114.7, 32.7],
            [-111.0, 31.3],
            [-108.2, 31.3],
            [-106.5, 31.8],
            [-104.5, 29.6],
            [-103.0, 29.0],
            [-101.4, 29.8],
            [-99.5, 27.5],
            [-97.2, 25.9],
        ],
    },
    CountryBorder {
        name: "colombia_venezuela",
        line: &[
            [-72.0, 11.8],
            [-72.5, 7.5],
            [-67.5, 6.2],
            [-67.8, 1.8],
        ],
    },
    CountryBorder {
        name: "colombia_peru_ecuador",
        line: &[
            [-78.8, 1.4],
            [-75.3, -0.1],
            [-70.0, -4.2],
        ],
    },
    CountryBorder {
        name: "ecuador_peru",
        line: &[
            [-80.3, -3.4],
            [-78.5, -5.0],
            [-75.3, -0.1],
        ],
    },
    CountryBorder {
        name: "brazil_west",
        line: &[
            [-60.0, 5.2],
            [-64.0, 4.0],
            [-67.8, 1.8],
            [-69.9, 1.0],
            [-69.4, -1.1],
            [-70.0, -4.2],
            [-73.0, -7.3],
            [-72.4, -10.0],
            [-69.6, -11.0],
            [-65.4, -9.8],
            [-65.0, -12.0],
            [-60.5, -13.8],
            [-58.2, -16.3],
            [-58.0, -20.0],
            [-55.6, -22.6],
            [-54.6, -25.6],
            [-53.7, -26.9],
            [-57.6, -30.2],
            [-53.4, -33.7],
        ],
    },
    CountryBorder {
        name: "peru_bolivia_chile",
        line: &[
            [-69.6, -11.0],
            [-69.0, -15.0],
            [-70.4, -18.3],
        ],
    },
    CountryBorder {
        name: "bolivia_south",
        line: &[
            [-70.4, -18.3],
            [-68.4, -22.5],
            [-62.6, -22.2],
            [-58.2, -20.2],
        ],
    },
    CountryBorder {
        name: "argentina_paraguay",
        line: &[
            [-62.6, -22.2],
            [-58.0, -27.3],
            [-54.6, -25.6],
        ],
    },
    CountryBorder {
        name: "argentina_chile",
        line: &[
            [-68.4, -22.5],
            [-68.1, -24.5],
            [-68.5, -27.0],
            [-69.7, -30.0],
            [-70.0, -33.0],
            [-70.4, -36.0],
            [-71.2, -39.5],
            [-71.7, -43.0],
            [-72.2, -46.5],
            [-73.3, -49.5],
            [-72.3, -51.7],
            [-68.6, -52.3],
        ],
    },
    CountryBorder {
        name: "spain_portugal",
        line: &[
            [-8.9, 41.9],
            [-6.2, 41.6],
            [-6.9, 40.0],
            [-7.0, 38.2],
            [-7.4, 37.2],
        ],
    },
    CountryBorder {
        name: "france_spain",
        line: &[
            [-1.8, 43.4],
            [0.7, 42.8],
            [3.2, 42.4],
        ],
    },
    CountryBorder {
        name: "france_east",
        line: &[
            [2.5, 51.1],
            [4.2, 49.9],
            [6.1, 49.5],
            [8.2, 49.0],
            [7.6, 47.6],
            [6.0, 46.2],
            [7.0, 45.9],
            [6.6, 45.1],
            [7.5, 43.8],
        ],
    },
    CountryBorder {
        name: "germany_east",
        line: &[
            [14.2, 53.9],
            [14.6, 52.6],
            [15.0, 51.1],
            [12.1, 50.3],
            [13.8, 48.8],
            [13.0, 47.5],
            [9.6, 47.5],
            [7.6, 47.6],
        ],
    },
    CountryBorder {
        name: "poland_east",
        line: &[
            [19.6, 54.4],
            [23.5, 53.9],
            [23.2, 52.2],
            [24.1, 50.8],
            [22.6, 49.1],
        ],
    },
    CountryBorder {
        name: "ukraine_romania",
        line: &[
            [22.6, 49.1],
            [26.6, 48.3],
            [28.2, 45.5],
        ],
    },
    CountryBorder {
        name: "norway_sweden",
        line: &[
            [11.5, 59.0],
            [12.5, 61.0],
            [12.2, 63.0],
            [14.5, 65.0],
            [16.5, 67.5],
            [20.0, 69.0],
        ],
    },
    CountryBorder {
        name: "finland_russia",
        line: &[
            [28.0, 69.0],
            [29.0, 67.0],
            [30.0, 64.0],
            [31.5, 62.9],
            [27.8, 60.5],
        ],
    },
    CountryBorder {
        name: "russia_west",
        line: &[
            [28.0, 59.5],
            [27.5, 57.5],
            [31.0, 56.0],
            [32.0, 53.0],
            [34.0, 52.2],
            [40.0, 49.6],
            [38.0, 47.1],
        ],
    },
    CountryBorder {
        name: "russia_kazakhstan",
        line: &[
            [47.0, 46.5],
            [50.0, 51.5],
            [55.0, 50.5],
            [61.0, 51.0],
            [61.0, 54.0],
            [69.0, 55.4],
            [76.0, 54.0],
            [80.0, 51.0],
            [87.0, 49.1],
        ],
    },
    CountryBorder {
        name: "russia_china",
        line: &[
            [87.0, 49.1],
            [92.0, 50.7],
            [98.0, 52.0],
            [108.0, 50.0],
            [116.5, 49.9],
            [120.0, 53.3],
            [127.5, 49.7],
            [131.0, 47.7],
            [135.0, 48.4],
            [133.0, 45.0],
            [130.6, 42.4],
        ],
    },
    CountryBorder {
        name: "mongolia_china",
        line: &[
            [87.8, 49.2],
            [90.5, 45.5],
            [96.0, 42.7],
            [105.0, 41.6],
            [111.0, 43.5],
            [119.7, 46.7],
            [116.5, 49.9],
        ],
    },
    CountryBorder {
        name: "china_korea",
        line: &[
            [124.3, 39.9],
            [128.0, 42.0],
            [130.6, 42.4],
        ],
    },
    CountryBorder {
        name: "korea_demarcation",
        line: &[
            [126.5, 37.7],
            [128.4, 38.6],
        ],
    },
    CountryBorder {
        name: "china_south",
        line: &[
            [74.5, 37.0],
            [78.0, 35.5],
            [79.5, 32.5],
            [81.0, 30.0],
            [86.0, 28.0],
            [88.0, 27.9],
            [92.0, 27.8],
            [97.0, 28.3],
            [98.5, 25.0],
            [101.0, 21.5],
            [106.5, 22.5],
            [108.0, 21.5],
        ],
    },
    CountryBorder {
        name: "india_pakistan",
        line: &[
            [74.5, 37.0],
            [75.0, 34.5],
            [74.0, 32.5],
            [74.5, 30.8],
            [71.0, 27.8],
            [70.0, 25.0],
            [68.2, 23.6],
        ],
    },
    CountryBorder {
        name: "pakistan_west",
        line: &[
            [74.5, 37.0],
            [71.5, 36.5],
            [71.0, 34.0],
            [69.5, 31.5],
            [66.5, 29.8],
            [62.0, 29.5],
            [61.8, 25.1],
        ],
    },
    CountryBorder {
        name: "iran_west",
        line: &[
            [44.0, 39.5],
            [44.8, 37.2],
            [46.0, 35.0],
            [45.5, 33.9],
            [47.8, 31.0],
            [48.5, 30.0],
        ],
    },
    CountryBorder {
        name: "turkey_east",
        line: &[
            [42.5, 41.5],
            [44.8, 39.7],
            [44.0, 37.2],
            [42.4, 37.1],
            [36.7, 36.8],
            [36.0, 36.0],
        ],
    },
    CountryBorder {
        name: "arabia_north",
        line: &[
            [34.9, 29.4],
            [37.0, 31.5],
            [39.2, 32.2],
            [42.0, 31.0],
            [44.7, 29.2],
            [47.5, 29.0],
        ],
    },
    CountryBorder {
        name: "arabia_south",
        line: &[
            [42.8, 16.4],
            [47.0, 16.9],
            [52.0, 19.0],
            [55.7, 22.0],
            [51.6, 24.2],
        ],
    },
    CountryBorder {
        name: "vietnam_west",
        line: &[
            [102.1, 22.4],
            [104.0, 20.9],
            [105.2, 18.6],
            [107.6, 15.0],
            [106.0, 11.7],
            [104.5, 10.4],
        ],
    },
    CountryBorder {
        name: "thailand_west",
        line: &[
            [101.0, 21.5],
            [100.1, 20.4],
            [98.2, 17.5],
            [99.2, 10.0],
            [100.1, 6.5],
            [102.1, 6.2],
        ],
    },
    CountryBorder {
        name: "borneo_malaysia_indonesia",
        line: &[
            [109.6, 1.9],
            [114.0, 1.4],
            [115.6, 4.2],
            [117.6, 4.2],
        ],
    },
    CountryBorder {
        name: "new_guinea",
        line: &[
            [141.0, -2.6],
            [141.0, -9.1],
        ],
    },
    CountryBorder {
        name: "egypt_west_south",
        line: &[
            [25.0, 31.5],
            [25.0, 22.0],
            [36.9, 22.0],
        ],
    },
    CountryBorder {
        name: "libya_south_west",
        line: &[
            [11.5, 33.1],
            [10.0, 30.0],
            [10.0, 25.0],
            [12.0, 23.5],
            [15.0, 23.0],
            [24.0, 20.0],
        ],
    },
    CountryBorder {
        name: "algeria_west_south",
        line: &[
            [-1.7, 35.0],
            [-1.2, 32.1],
            [-4.0, 30.0],
            [-8.7, 27.7],
            [-4.8, 25.0],
            [1.2, 20.7],
            [3.2, 19.0],
            [5.8, 19.4],
            [12.0, 23.5],
        ],
    },
    CountryBorder {
        name: "sahel",
        line: &[
            [-17.0, 14.7],
            [-12.0, 14.8],
            [-5.5, 15.5],
            [0.0, 15.0],
            [4.0, 13.5],
            [9.0, 12.8],
            [14.0, 13.0],
            [15.5, 20.0],
            [24.0, 20.0],
        ],
    },
    CountryBorder {
        name: "sudan_south",
        line: &[
            [24.0, 20.0],
            [24.0, 10.0],
            [27.5, 9.5],
            [34.0, 9.5],
            [36.0, 14.3],
            [38.5, 18.0],
        ],
    },
    CountryBorder {
        name: "congo_basin",
        line: &[
            [12.2, -6.0],
            [16.0, -5.9],
            [17.6, -8.1],
            [21.9, -7.3],
            [22.0, -11.0],
            [25.4, -11.3],
            [29.0, -13.4],
            [29.6, -12.2],
            [28.4, -9.2],
            [29.3, -6.0],
            [29.2, -3.3],
            [29.6, -1.4],
            [30.5, 2.4],
            [27.4, 5.2],
            [22.4, 4.0],
            [18.5, 3.5],
            [16.0, 2.0],
            [14.0, 1.4],
        ],
    },
    CountryBorder {
        name: "east_africa",
        line: &[
            [29.6, -1.4],
            [34.0, -1.0],
            [37.6, -3.5],
            [39.2, -4.7],
        ],
    },
    CountryBorder {
        name: "horn_of_africa",
        line: &[
            [34.0, 9.5],
            [35.0, 5.0],
            [41.9, 3.9],
            [45.0, 8.0],
            [48.0, 8.0],
        ],
    },
    CountryBorder {
        name: "namibia_angola",
        line: &[
            [11.8, -17.3],
            [18.0, -17.5],
            [24.0, -17.5],
            [25.3, -17.8],
        ],
    },
    CountryBorder {
        name: "south_africa_north",
        line: &[
            [16.5, -28.6],
            [20.0, -24.8],
            [20.0, -22.0],
            [25.0, -25.7],
            [29.4, -22.1],
            [31.5, -22.3],
            [32.0, -26.8],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map_geometry::{MAX_LAT, MIN_LAT};

    #[test]
    fn borders_are_polylines_inside_the_projected_band() {
        assert!(!COUNTRY_BORDERS.is_empty());
        for border in COUNTRY_BORDERS {
            assert!(border.line.len() >= 2, "{}", border.name);
            for [lon, lat] in border.line {
                assert!((-180.0..=180.0).contains(lon), "{}", border.name);
                assert!(
                    (MIN_LAT..=MAX_LAT).contains(&f64::from(*lat)),
                    "{}",
                    border.name
                );
            }
        }
    }

    #[test]
    fn border_names_are_unique() {
        let mut names: Vec<_> = COUNTRY_BORDERS.iter().map(|border| border.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COUNTRY_BORDERS.len());
    }
}
