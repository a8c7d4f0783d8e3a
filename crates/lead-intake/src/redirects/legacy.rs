/// Paths from the previous site and where that content lives now.
pub(crate) const LEGACY_REDIRECTS: &[(&str, &str)] = &[
    ("/home", "/"),
    ("/index.html", "/"),
    ("/index.php", "/"),
    ("/about-us", "/about"),
    ("/about-us.html", "/about"),
    ("/our-team", "/about"),
    ("/contact-us", "/contact"),
    ("/contact-us.html", "/contact"),
    ("/request-service", "/contact"),
    ("/free-estimate", "/contact"),
    ("/schedule-service", "/contact"),
    ("/emergency-service", "/emergency"),
    ("/24-hour-emergency-plumber", "/emergency"),
    ("/plumbing-services", "/plumbing"),
    ("/services/plumbing", "/plumbing"),
    ("/services/plumbing-repair", "/plumbing"),
    ("/services/water-heaters", "/plumbing/water-heaters"),
    ("/water-heater-repair", "/plumbing/water-heaters"),
    ("/tankless-water-heaters", "/plumbing/water-heaters"),
    ("/services/leak-detection", "/plumbing/leak-detection"),
    ("/services/gas-lines", "/plumbing/gas-lines"),
    ("/services/sump-pumps", "/waterproofing/sump-pumps"),
    ("/sump-pump-installation", "/waterproofing/sump-pumps"),
    ("/drain-cleaning", "/sewer-drain"),
    ("/services/drain-cleaning", "/sewer-drain"),
    ("/sewer-services", "/sewer-drain"),
    ("/services/sewer-repair", "/sewer-drain/sewer-line-repair"),
    ("/sewer-line-replacement", "/sewer-drain/sewer-line-repair"),
    ("/services/hydro-jetting", "/sewer-drain/hydro-jetting"),
    ("/sewer-camera-inspection", "/sewer-drain/camera-inspection"),
    ("/basement-waterproofing", "/waterproofing"),
    ("/services/waterproofing", "/waterproofing"),
    ("/foundation-repair", "/waterproofing/foundation-repair"),
    ("/crawl-space-encapsulation", "/waterproofing/crawl-space"),
    ("/water-damage", "/water-damage-restoration"),
    ("/services/water-damage-restoration", "/water-damage-restoration"),
    ("/flood-cleanup", "/water-damage-restoration"),
    ("/service-areas", "/locations"),
    ("/service-area/akron-oh", "/locations/akron"),
    ("/service-area/canton-oh", "/locations/canton"),
    ("/service-area/cleveland-oh", "/locations/cleveland"),
    ("/service-area/youngstown-oh", "/locations/youngstown"),
    ("/service-area/pittsburgh-pa", "/locations/pittsburgh"),
    ("/service-area/erie-pa", "/locations/erie"),
    ("/financing-options", "/financing"),
    ("/specials", "/coupons"),
    ("/reviews-testimonials", "/reviews"),
    ("/blog-2", "/blog"),
    ("/careers-2", "/careers"),
];
