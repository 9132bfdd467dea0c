//! Coarse land outlines as `[lon, lat]` rings, enough to orient a viewer.
//! Antarctica lies outside the projected band and is omitted.

pub(crate) struct LandOutline {
    pub name: &'static str,
    pub ring: &'static [[f32; 2]],
}

pub(crate) const LAND_OUTLINES: &[LandOutline] = &[
    LandOutline {
        name: "north_america",
        ring: &[
            [-166.0, 68.0],
            [-156.0, 71.0],
            [-140.0, 70.0],
            [-128.0, 70.0],
            [-115.0, 68.0],
            [-100.0, 68.0],
            [-95.0, 72.0],
            [-85.0, 70.0],
            [-80.0, 63.0],
            [-94.0, 59.0],
            [-93.0, 55.0],
            [-82.0, 53.0],
            [-78.0, 59.0],
            [-72.0, 61.0],
            [-64.0, 60.0],
            [-56.0, 53.0],
            [-60.0, 47.0],
            [-66.0, 44.0],
            [-70.0, 42.0],
            [-74.0, 40.0],
            [-76.0, 35.0],
            [-81.0, 31.0],
            [-80.0, 26.0],
            [-81.0, 25.0],
            [-83.0, 29.0],
            [-89.0, 30.0],
            [-94.0, 29.0],
            [-97.0, 26.0],
            [-97.0, 21.0],
            [-95.0, 18.0],
            [-91.0, 19.0],
            [-90.0, 21.0],
            [-87.0, 21.0],
            [-88.0, 16.0],
            [-84.0, 15.0],
            [-83.0, 10.0],
            [-79.0, 9.0],
            [-77.0, 8.0],
            [-80.0, 7.0],
            [-85.0, 10.0],
            [-87.0, 13.0],
            [-92.0, 15.0],
            [-97.0, 16.0],
            [-105.0, 20.0],
            [-106.0, 23.0],
            [-110.0, 24.0],
            [-112.0, 29.0],
            [-115.0, 31.0],
            [-117.0, 32.0],
            [-121.0, 35.0],
            [-124.0, 40.0],
            [-124.0, 46.0],
            [-127.0, 50.0],
            [-133.0, 55.0],
            [-139.0, 59.0],
            [-147.0, 61.0],
            [-153.0, 59.0],
            [-158.0, 57.0],
            [-163.0, 55.0],
            [-158.0, 59.0],
            [-163.0, 60.0],
            [-166.0, 62.0],
            [-165.0, 65.0],
        ],
    },
    LandOutline {
        name: "baffin",
        ring: &[
            [-80.0, 73.0],
            [-70.0, 70.0],
            [-62.0, 67.0],
            [-65.0, 63.0],
            [-75.0, 65.0],
            [-78.0, 69.0],
        ],
    },
    LandOutline {
        name: "greenland",
        ring: &[
            [-73.0, 78.0],
            [-62.0, 82.0],
            [-40.0, 83.0],
            [-22.0, 81.0],
            [-18.0, 76.0],
            [-22.0, 70.0],
            [-32.0, 68.0],
            [-42.0, 60.0],
            [-48.0, 61.0],
            [-53.0, 66.0],
            [-55.0, 70.0],
            [-60.0, 76.0],
        ],
    },
    LandOutline {
        name: "cuba",
        ring: &[[-85.0, 22.0], [-80.0, 23.0], [-74.0, 20.0], [-78.0, 20.0]],
    },
    LandOutline {
        name: "south_america",
        ring: &[
            [-77.0, 8.0],
            [-72.0, 12.0],
            [-64.0, 10.0],
            [-60.0, 8.0],
            [-52.0, 5.0],
            [-50.0, 0.0],
            [-44.0, -2.0],
            [-35.0, -6.0],
            [-35.0, -9.0],
            [-39.0, -14.0],
            [-41.0, -22.0],
            [-48.0, -26.0],
            [-53.0, -34.0],
            [-58.0, -38.0],
            [-62.0, -39.0],
            [-65.0, -45.0],
            [-68.0, -50.0],
            [-69.0, -54.0],
            [-74.0, -52.0],
            [-74.0, -45.0],
            [-73.0, -37.0],
            [-71.0, -30.0],
            [-70.0, -18.0],
            [-76.0, -14.0],
            [-81.0, -6.0],
            [-80.0, -1.0],
            [-78.0, 3.0],
        ],
    },
    LandOutline {
        name: "iceland",
        ring: &[
            [-24.0, 65.0],
            [-22.0, 66.0],
            [-15.0, 66.0],
            [-13.0, 65.0],
            [-18.0, 63.0],
            [-22.0, 64.0],
        ],
    },
    LandOutline {
        name: "great_britain",
        ring: &[
            [-5.0, 50.0],
            [1.0, 51.0],
            [2.0, 53.0],
            [-2.0, 56.0],
            [-2.0, 58.0],
            [-5.0, 58.0],
            [-6.0, 56.0],
            [-3.0, 54.0],
            [-5.0, 52.0],
        ],
    },
    LandOutline {
        name: "africa",
        ring: &[
            [-17.0, 21.0],
            [-16.0, 26.0],
            [-13.0, 28.0],
            [-9.0, 32.0],
            [-6.0, 36.0],
            [3.0, 37.0],
            [10.0, 37.0],
            [11.0, 33.0],
            [15.0, 32.0],
            [20.0, 31.0],
            [25.0, 32.0],
            [32.0, 31.0],
            [34.0, 28.0],
            [37.0, 22.0],
            [39.0, 16.0],
            [43.0, 12.0],
            [51.0, 12.0],
            [48.0, 5.0],
            [41.0, -2.0],
            [39.0, -7.0],
            [40.0, -15.0],
            [35.0, -24.0],
            [32.0, -29.0],
            [27.0, -34.0],
            [20.0, -35.0],
            [17.0, -29.0],
            [12.0, -17.0],
            [13.0, -8.0],
            [9.0, -1.0],
            [9.0, 4.0],
            [4.0, 6.0],
            [-4.0, 5.0],
            [-8.0, 4.0],
            [-13.0, 8.0],
            [-17.0, 14.0],
        ],
    },
    LandOutline {
        name: "madagascar",
        ring: &[
            [44.0, -25.0],
            [47.0, -25.0],
            [50.0, -16.0],
            [49.0, -12.0],
            [44.0, -16.0],
            [43.0, -22.0],
        ],
    },
    LandOutline {
        name: "eurasia",
        ring: &[
            [-9.0, 37.0],
            [-9.0, 43.0],
            [-2.0, 43.5],
            [-4.0, 48.0],
            [2.0, 51.0],
            [5.0, 53.0],
            [8.0, 54.0],
            [8.0, 57.0],
            [10.0, 59.0],
            [5.0, 59.0],
            [5.0, 62.0],
            [12.0, 66.0],
            [18.0, 70.0],
            [28.0, 71.0],
            [33.0, 69.0],
            [40.0, 67.0],
            [44.0, 68.0],
            [55.0, 68.0],
            [60.0, 69.0],
            [68.0, 72.0],
            [73.0, 72.0],
            [80.0, 73.0],
            [88.0, 75.0],
            [100.0, 77.0],
            [112.0, 74.0],
            [125.0, 73.0],
            [140.0, 72.0],
            [152.0, 71.0],
            [160.0, 70.0],
            [170.0, 70.0],
            [180.0, 68.0],
            [180.0, 65.0],
            [178.0, 62.0],
            [172.0, 60.0],
            [163.0, 58.0],
            [160.0, 54.0],
            [156.0, 51.0],
            [156.0, 57.0],
            [152.0, 59.0],
            [143.0, 59.0],
            [137.0, 55.0],
            [140.0, 50.0],
            [140.0, 46.0],
            [135.0, 43.0],
            [130.0, 42.0],
            [129.0, 36.0],
            [126.0, 35.0],
            [126.0, 38.0],
            [125.0, 40.0],
            [121.0, 39.0],
            [122.0, 37.0],
            [119.0, 35.0],
            [121.0, 31.0],
            [122.0, 29.0],
            [119.0, 25.0],
            [114.0, 22.0],
            [108.0, 21.0],
            [106.0, 18.0],
            [109.0, 12.0],
            [105.0, 9.0],
            [103.0, 10.0],
            [101.0, 13.0],
            [100.0, 8.0],
            [104.0, 1.0],
            [101.0, 3.0],
            [98.0, 8.0],
            [98.0, 16.0],
            [94.0, 17.0],
            [92.0, 22.0],
            [88.0, 22.0],
            [86.0, 20.0],
            [80.0, 15.0],
            [80.0, 10.0],
            [77.0, 8.0],
            [74.0, 14.0],
            [73.0, 18.0],
            [72.0, 21.0],
            [67.0, 25.0],
            [62.0, 25.0],
            [57.0, 26.0],
            [56.0, 27.0],
            [52.0, 28.0],
            [48.0, 30.0],
            [48.0, 28.0],
            [51.0, 24.0],
            [56.0, 24.0],
            [59.0, 22.0],
            [55.0, 17.0],
            [52.0, 16.0],
            [45.0, 13.0],
            [43.0, 15.0],
            [39.0, 21.0],
            [35.0, 28.0],
            [34.0, 31.0],
            [35.0, 33.0],
            [36.0, 36.0],
            [30.0, 36.0],
            [27.0, 37.0],
            [26.0, 40.0],
            [29.0, 41.0],
            [32.0, 41.0],
            [36.0, 42.0],
            [41.0, 41.0],
            [41.0, 44.0],
            [37.0, 45.0],
            [35.0, 47.0],
            [31.0, 46.0],
            [29.0, 44.0],
            [28.0, 41.0],
            [26.0, 41.0],
            [23.0, 40.0],
            [24.0, 38.0],
            [22.0, 37.0],
            [21.0, 39.0],
            [19.0, 42.0],
            [16.0, 43.0],
            [14.0, 45.0],
            [12.0, 45.0],
            [12.0, 44.0],
            [16.0, 41.0],
            [18.0, 40.0],
            [16.0, 38.0],
            [15.0, 38.0],
            [12.0, 42.0],
            [9.0, 44.0],
            [6.0, 43.0],
            [3.0, 43.0],
            [3.0, 42.0],
            [0.0, 40.0],
            [0.0, 38.0],
            [-2.0, 37.0],
            [-5.0, 36.0],
        ],
    },
    LandOutline {
        name: "japan",
        ring: &[
            [130.0, 31.0],
            [132.0, 33.0],
            [135.0, 34.0],
            [139.0, 35.0],
            [141.0, 38.0],
            [142.0, 40.0],
            [145.0, 43.0],
            [142.0, 45.0],
            [140.0, 42.0],
            [140.0, 40.0],
            [137.0, 37.0],
            [133.0, 35.0],
            [130.0, 34.0],
        ],
    },
    LandOutline {
        name: "sumatra",
        ring: &[
            [95.0, 5.0],
            [98.0, 4.0],
            [104.0, -2.0],
            [106.0, -6.0],
            [102.0, -4.0],
            [96.0, 2.0],
        ],
    },
    LandOutline {
        name: "borneo",
        ring: &[
            [109.0, 2.0],
            [113.0, 4.0],
            [117.0, 7.0],
            [119.0, 5.0],
            [118.0, 1.0],
            [116.0, -4.0],
            [111.0, -3.0],
            [110.0, -1.0],
        ],
    },
    LandOutline {
        name: "new_guinea",
        ring: &[
            [131.0, -1.0],
            [138.0, -2.0],
            [145.0, -4.0],
            [150.0, -10.0],
            [143.0, -9.0],
            [138.0, -8.0],
            [134.0, -4.0],
        ],
    },
    LandOutline {
        name: "australia",
        ring: &[
            [114.0, -22.0],
            [113.0, -26.0],
            [115.0, -34.0],
            [118.0, -35.0],
            [123.0, -34.0],
            [129.0, -32.0],
            [135.0, -35.0],
            [138.0, -35.0],
            [140.0, -38.0],
            [147.0, -39.0],
            [150.0, -37.0],
            [153.0, -32.0],
            [153.0, -25.0],
            [150.0, -22.0],
            [146.0, -19.0],
            [145.0, -15.0],
            [142.0, -11.0],
            [141.0, -13.0],
            [140.0, -17.0],
            [136.0, -15.0],
            [136.0, -12.0],
            [131.0, -11.0],
            [129.0, -15.0],
            [126.0, -14.0],
            [122.0, -17.0],
        ],
    },
    LandOutline {
        name: "new_zealand",
        ring: &[
            [172.0, -34.0],
            [175.0, -37.0],
            [178.0, -38.0],
            [175.0, -41.0],
            [171.0, -44.0],
            [167.0, -46.0],
            [168.0, -44.0],
            [173.0, -41.0],
            [174.0, -39.0],
        ],
    },
];
